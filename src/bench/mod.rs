//! Adaptive timing of `Grid::step` across grid sizes.

pub mod config;
pub mod harness;
pub mod report;
pub mod source;
pub mod stopwatch;

pub use self::config::{BenchConfig, ConfigError};
pub use self::harness::{Accumulator, Harness, LoopState, Sample};
pub use self::report::{BenchmarkRecord, ResultTable};
pub use self::source::{GridSource, RandomGrids};
pub use self::stopwatch::{MonotonicStopwatch, Stopwatch};

use crate::error::BenchError;
use log::info;

/// Runs the whole benchmark with random grids and the monotonic clock, then writes the
/// table to `config.output`. Nothing is written unless every size completed.
pub fn run(config: BenchConfig) -> Result<ResultTable, BenchError> {
    let source = RandomGrids::from_seed(config.seed);
    let mut harness = Harness::new(config, source, MonotonicStopwatch)?;
    let table = harness.run()?;
    let output = &harness.config().output;
    table.save(output)?;
    info!("Wrote {} results to {}", table.len(), output.display());
    Ok(table)
}
