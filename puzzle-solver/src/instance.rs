//! Solver instance implementation

use crate::PuzzleId;
use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A solver instance bound to one parsed puzzle input
///
/// Holds the shared data produced by [`PuzzleParser::parse`](crate::PuzzleParser::parse)
/// together with the parse timestamps.
pub struct SolverInstance<S: Solver> {
    id: PuzzleId,
    shared: S::Shared,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<S: Solver> SolverInstance<S> {
    /// Create a new solver instance by parsing input
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Successfully parsed, with parse timing recorded
    /// * `Err(ParseError)` - Parsing failed
    pub fn new(id: PuzzleId, input: &str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            id,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use puzzle_solver::DynSolver;
///
/// fn example(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     let result = solver.solve(1)?;
///     println!("Part 1: {} (took {:?})", result.answer, result.duration());
///     println!("Parse took {:?}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved successfully with timing info
    /// * `Err(SolveError)` - The part is out of range, not implemented, or solving failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the puzzle this solver was created for
    fn id(&self) -> PuzzleId;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn id(&self) -> PuzzleId {
        self.id
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PuzzleParser;

    struct Counter;

    impl PuzzleParser for Counter {
        type Shared = Vec<u32>;

        fn parse(input: &str) -> Result<Self::Shared, ParseError> {
            input
                .split_whitespace()
                .map(|t| {
                    t.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("not a number: {t}")))
                })
                .collect()
        }
    }

    impl Solver for Counter {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::Shared, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                2 => Err(SolveError::PartNotImplemented(2)),
                _ => unreachable!("range checked by SolverExt"),
            }
        }
    }

    #[test]
    fn test_instance_records_timings_and_solves() {
        let mut instance = SolverInstance::<Counter>::new(PuzzleId::new(2023, 1), "1 2 3").unwrap();
        assert!(instance.parse_end() >= instance.parse_start());
        assert_eq!(instance.id(), PuzzleId::new(2023, 1));
        assert_eq!(instance.parts(), 2);

        let result = instance.solve(1).unwrap();
        assert_eq!(result.answer, "3");
        assert!(result.duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_instance_propagates_errors() {
        assert!(matches!(
            SolverInstance::<Counter>::new(PuzzleId::new(2023, 1), "1 x"),
            Err(ParseError::InvalidFormat(_))
        ));

        let mut instance = SolverInstance::<Counter>::new(PuzzleId::new(2023, 1), "").unwrap();
        assert!(matches!(instance.solve(2), Err(SolveError::PartNotImplemented(2))));
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
    }
}
