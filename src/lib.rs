//! Measures how long one Game of Life generation takes on square toroidal grids of
//! increasing size.
//!
//! [`data`] holds the grid and its transition rule; [`bench`] holds the adaptive
//! timing harness and the result table it produces.

pub mod bench;
pub mod data;
pub mod error;

pub use error::BenchError;
