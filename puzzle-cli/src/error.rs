//! Error types for the CLI

use puzzle_solver::{PuzzleId, SolverError};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] puzzle_solver::RegistrationError),

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// At least one selected part did not produce an answer
    #[error("{failed} of {total} part(s) failed")]
    Failed { failed: usize, total: usize },
}

/// Why a single part did not produce an answer
///
/// Cloned into every part of a puzzle whose input could not be loaded or parsed.
#[derive(Error, Debug, Clone)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Solver(Arc<SolverError>),
}

impl From<SolverError> for RunError {
    fn from(e: SolverError) -> Self {
        Self::Solver(Arc::new(e))
    }
}

/// Input file errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No input file for the puzzle
    #[error("No input for {id} (expected {})", path.display())]
    Missing { id: PuzzleId, path: PathBuf },

    /// The file exists but could not be read
    #[error("Failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },
}
