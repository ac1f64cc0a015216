use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_K_MIN: u32 = 2;
pub const DEFAULT_K_MAX: u32 = 10;
pub const DEFAULT_TIME_BUDGET_SECS: f64 = 5.0;
pub const DEFAULT_MAX_ITERATIONS: u64 = 10_000;
pub const DEFAULT_OUTPUT: &str = "results_rust.csv";

// An N x N grid with N = 2^k needs 2^(2k) cells; keep that below isize::MAX bytes.
const MAX_K: u32 = (usize::BITS - 2) / 2;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("k-min ({k_min}) must not be greater than k-max ({k_max})")]
    EmptyRange { k_min: u32, k_max: u32 },
    #[error("k-max ({k_max}) is too large, grids of 2^{k_max} x 2^{k_max} cannot be allocated (max {max})")]
    SizeOverflow { k_max: u32, max: u32 },
    #[error("time budget must be a positive number of seconds, got {0}")]
    InvalidTimeBudget(f64),
    #[error("max iterations must be at least 1")]
    ZeroIterations,
    #[error("invalid value for {name}: {message}")]
    Parse { name: String, message: String },
}

/// Settings for one benchmark run.
///
/// Grid sizes are `2^k` for every `k` in `k_min..=k_max`. Each size is stepped until
/// the accumulated time reaches `time_budget_secs` or `max_iterations` calls have
/// been made, whichever happens first.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub k_min: u32,
    pub k_max: u32,
    pub time_budget_secs: f64,
    pub max_iterations: u64,
    /// Seed for the grid generator; `None` draws from entropy.
    pub seed: Option<u64>,
    pub output: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            k_min: DEFAULT_K_MIN,
            k_max: DEFAULT_K_MAX,
            time_budget_secs: DEFAULT_TIME_BUDGET_SECS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.k_min > self.k_max {
            return Err(ConfigError::EmptyRange {
                k_min: self.k_min,
                k_max: self.k_max,
            });
        }
        if self.k_max > MAX_K {
            return Err(ConfigError::SizeOverflow {
                k_max: self.k_max,
                max: MAX_K,
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        self.time_budget().map(|_| ())
    }

    pub fn time_budget(&self) -> Result<Duration, ConfigError> {
        let secs = self.time_budget_secs;
        if secs.is_nan() || secs <= 0.0 {
            return Err(ConfigError::InvalidTimeBudget(secs));
        }
        Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidTimeBudget(secs))
    }

    /// Grid side lengths to test, ascending.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.k_min..=self.k_max).map(|k| 1usize << k)
    }
}
