use crate::bench::ConfigError;
use crate::data::GridError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Anything that aborts a benchmark run.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not build grid: {0}")]
    Grid(#[from] GridError),
    #[error("could not write results to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
