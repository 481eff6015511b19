//! 2023 day 5: seed numbers pushed through a chain of remap tables.
//!
//! Part 1 maps each listed seed number on its own. Part 2 reads the seed line
//! as `(start, length)` pairs and maps whole ranges with the interval pipeline.

use puzzle_solver::{ParseError, PuzzleParser, PuzzleSolver, SolveError, Solver as SolverTrait};

use crate::utils::remap::{PipelineOptions, RemapError, RemapInput};

#[derive(PuzzleSolver)]
#[puzzle(year = 2023, day = 5, tags = ["ranges", "intervals"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    input: RemapInput,
    options: PipelineOptions,
}

impl PuzzleParser for Solver {
    type Shared = SharedData;

    fn parse(input: &str) -> Result<Self::Shared, ParseError> {
        let input = input
            .parse::<RemapInput>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(SharedData {
            input,
            options: PipelineOptions::default(),
        })
    }
}

impl SolverTrait for Solver {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::Shared, part: u8) -> Result<String, SolveError> {
        let answer = match part {
            1 => shared.input.lowest_seed_location(),
            2 => shared.input.lowest_range_location(shared.options),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        answer.map(|lowest| lowest.to_string()).map_err(solve_failed)
    }
}

fn solve_failed(e: RemapError) -> SolveError {
    SolveError::SolveFailed(Box::new(e))
}
