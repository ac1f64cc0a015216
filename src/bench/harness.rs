use super::config::{BenchConfig, ConfigError};
use super::report::{BenchmarkRecord, ResultTable};
use super::source::GridSource;
use super::stopwatch::Stopwatch;
use crate::data::Grid;
use crate::error::BenchError;
use log::{debug, info};
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Accumulating,
    Done,
}

/// Timing totals for one grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub iterations: u64,
    pub total: Duration,
}

impl Sample {
    pub fn average_secs(&self) -> f64 {
        self.total.as_secs_f64() / self.iterations as f64
    }
}

/// Sums per-call durations until either the time budget or the iteration cap is hit.
///
/// The thresholds are only checked after a call has been recorded, so a sample always
/// holds at least one call even when that call alone overshoots the budget.
#[derive(Debug)]
pub struct Accumulator {
    budget: Duration,
    max_iterations: u64,
    total: Duration,
    iterations: u64,
}

impl Accumulator {
    pub fn new(budget: Duration, max_iterations: u64) -> Accumulator {
        Accumulator {
            budget,
            max_iterations,
            total: Duration::ZERO,
            iterations: 0,
        }
    }

    pub fn record(&mut self, elapsed: Duration) -> LoopState {
        self.total = self.total.saturating_add(elapsed);
        self.iterations += 1;
        if self.total >= self.budget || self.iterations >= self.max_iterations {
            LoopState::Done
        } else {
            LoopState::Accumulating
        }
    }

    pub fn sample(&self) -> Sample {
        Sample {
            iterations: self.iterations,
            total: self.total,
        }
    }
}

/// Drives the benchmark: one grid per size, stepped repeatedly on a single thread.
///
/// Every call steps the same starting grid; the generation it produces is thrown away
/// rather than fed back in, so each sample measures the cost of one transition.
pub struct Harness<S, T> {
    config: BenchConfig,
    budget: Duration,
    source: S,
    stopwatch: T,
}

impl<S: GridSource, T: Stopwatch> Harness<S, T> {
    /// Rejects an invalid configuration before any grid is built.
    pub fn new(config: BenchConfig, source: S, stopwatch: T) -> Result<Harness<S, T>, ConfigError> {
        config.validate()?;
        let budget = config.time_budget()?;
        Ok(Harness {
            config,
            budget,
            source,
            stopwatch,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Times `grid.step()` until the budget or the iteration cap is reached.
    pub fn measure(&mut self, grid: &Grid) -> Sample {
        let mut accumulator = Accumulator::new(self.budget, self.config.max_iterations);
        loop {
            let (_, elapsed) = self.stopwatch.measure(|| black_box(black_box(grid).step()));
            if accumulator.record(elapsed) == LoopState::Done {
                return accumulator.sample();
            }
        }
    }

    /// Measures every configured size in ascending order. Any failure aborts the whole
    /// run, so a returned table always has one record per size.
    pub fn run(&mut self) -> Result<ResultTable, BenchError> {
        let sizes: Vec<usize> = self.config.sizes().collect();
        let mut table = ResultTable::with_capacity(sizes.len());
        for size in sizes {
            info!("N = {}", size);
            let grid = self.source.grid(size)?;
            let sample = self.measure(&grid);
            let seconds = sample.average_secs();
            debug!(
                "N = {}: {} iterations in {:?}, {:.9}s per step",
                size, sample.iterations, sample.total, seconds
            );
            table.push(BenchmarkRecord { size, seconds });
        }
        Ok(table)
    }
}
