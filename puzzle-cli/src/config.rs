//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding puzzle inputs
    pub data_dir: PathBuf,
    /// Explicit input file replacing the data directory lookup
    pub input_override: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, expanding `~` and checking the input file
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let data_dir = expand_tilde(&args.data_dir);
        let input_override = args.input.as_deref().map(expand_tilde);

        if let Some(path) = &input_override
            && !path.is_file()
        {
            return Err(CliError::Config(format!(
                "input file {} does not exist",
                path.display()
            )));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            data_dir,
            input_override,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
