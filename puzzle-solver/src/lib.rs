//! Puzzle Solver Library
//!
//! A small, type-safe framework for daily calendar puzzles. Each puzzle is
//! implemented as a solver with its own input parsing and produces answers for
//! one or more parts.
//!
//! # Overview
//!
//! This library provides:
//! - A trait pair ([`PuzzleParser`] + [`Solver`]) separating parsing from solving
//! - Type-erased solver instances ([`DynSolver`]) that record parse/solve timings
//! - An explicit registry mapping a [`PuzzleId`] to a solver factory
//! - Plugin collection through `inventory` and `#[derive(PuzzleSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{PuzzleId, PuzzleParser, ParseError, SolveError, Solver, RegistryBuilder, register_solver};
//!
//! pub struct MyDay1;
//!
//! impl PuzzleParser for MyDay1 {
//!     type Shared = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::Shared, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::Shared, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, MyDay1, 2023, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(PuzzleId::new(2023, 1), "1\n2\n3").unwrap();
//! let result = solver.solve(1).unwrap();
//! assert_eq!(result.answer, "6");
//! ```
//!
//! # Plugin System and Derive Macro
//!
//! Use `#[derive(PuzzleSolver)]` to register a solver automatically:
//! ```ignore
//! #[derive(PuzzleSolver)]
//! #[puzzle(year = 2023, day = 5, tags = ["ranges"])]
//! struct Day5Solver;
//! ```

mod error;
mod id;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use id::{BASE_YEAR, DAYS_PER_YEAR, MAX_YEARS, PuzzleId};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry};
pub use solver::{PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use puzzle_solver_macros::PuzzleSolver;
