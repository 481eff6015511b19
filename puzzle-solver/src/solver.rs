//! Core solver trait and related types

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// Keeps parsing separate from solving: the input is parsed once and every
/// part works on the same shared data.
///
/// # Example
///
/// ```
/// use puzzle_solver::{PuzzleParser, ParseError};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type Shared = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Shared, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait PuzzleParser {
    /// Parsed input plus any intermediate results the parts want to share
    type Shared;

    /// Parse the input string into the shared data structure.
    fn parse(input: &str) -> Result<Self::Shared, ParseError>;
}

/// Core trait that all puzzle solvers implement.
///
/// # Example
///
/// ```
/// use puzzle_solver::{PuzzleParser, ParseError, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl PuzzleParser for Day1Solver {
///     type Shared = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Shared, ParseError> {
///         input.lines()
///             .map(|line| line.parse().map_err(|_|
///                 ParseError::InvalidFormat("Expected integer".to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::Shared, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i32>().to_string()),
///             2 => Ok(shared.iter().product::<i32>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: PuzzleParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data (parsed input and intermediate results)
    /// * `part` - The part number (1, 2, etc.)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::Shared, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(shared: &mut Self::Shared, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
