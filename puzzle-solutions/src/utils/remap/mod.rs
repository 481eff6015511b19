//! Interval remapping engine
//!
//! Pushes a set of integer ranges through an ordered sequence of
//! piecewise-linear remap tables. Each table ([`RemapStage`]) is a list of
//! disjoint `[source, source + span) -> source + offset` rules; values outside
//! every rule keep their number. After each stage the working set is reduced
//! to a sorted, disjoint cover ([`minimize`]), and after the last stage the
//! lowest value reached is the answer.
//!
//! All ranges are half-open `[start, end)`. Whether ranges that merely touch
//! are merged is controlled by [`MergePolicy`] (merging by default).
//!
//! # Example
//!
//! ```rust
//! use puzzle_solutions::utils::remap::{PipelineOptions, RemapInput};
//!
//! let input: RemapInput = "seeds: 79 14 55 13\n\nseed-to-soil map:\n52 50 48\n"
//!     .parse()
//!     .unwrap();
//! assert_eq!(input.lowest_seed_location().unwrap(), 13);
//! assert_eq!(input.lowest_range_location(PipelineOptions::default()).unwrap(), 57);
//! ```

mod error;
mod interval;
mod parse;
mod pipeline;
mod stage;

pub use error::RemapError;
pub use interval::{Interval, MergePolicy, minimize};
pub use parse::RemapInput;
pub use pipeline::{PipelineOptions, WorkingSet, apply_stage, run_pipeline};
pub use stage::{RemapRule, RemapStage};
