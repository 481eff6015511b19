//! Algorithms shared between solutions

pub mod remap;
