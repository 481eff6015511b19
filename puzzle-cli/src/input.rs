//! Puzzle input files on disk

use crate::error::InputError;
use puzzle_solver::PuzzleId;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Locates and reads puzzle inputs
///
/// Directory layout: `{data_dir}/{year}_day{day:02}.txt`, unless an explicit
/// override file is given, which then serves every puzzle.
pub struct InputStore {
    data_dir: PathBuf,
    override_path: Option<PathBuf>,
}

impl InputStore {
    pub fn new(data_dir: PathBuf, override_path: Option<PathBuf>) -> Self {
        Self {
            data_dir,
            override_path,
        }
    }

    /// Get the input path for a puzzle
    pub fn input_path(&self, id: PuzzleId) -> PathBuf {
        match &self.override_path {
            Some(path) => path.clone(),
            None => self
                .data_dir
                .join(format!("{}_day{:02}.txt", id.year, id.day)),
        }
    }

    /// Check if the input file exists
    pub fn contains(&self, id: PuzzleId) -> bool {
        self.input_path(id).is_file()
    }

    /// Read the input for a puzzle
    pub fn get(&self, id: PuzzleId) -> Result<String, InputError> {
        let path = self.input_path(id);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => InputError::Missing { id, path: path.clone() },
            _ => InputError::Read {
                path: path.clone(),
                reason: e.to_string(),
            },
        })
    }
}
