//! Daily puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Each one derives `PuzzleSolver`, which
//! submits it as a plugin to the solver framework. Reusable algorithms live
//! under [`utils`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
