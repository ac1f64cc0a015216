use gol_bench::bench::{self, BenchConfig, Harness, MonotonicStopwatch, RandomGrids, Stopwatch};
use gol_bench::data::{Grid, GridError};
use gol_bench::BenchError;
use std::fs;
use std::time::Duration;

fn zero_grid(size: usize) -> Result<Grid, GridError> {
    Grid::dead(size, size)
}

fn small_config(k_min: u32, k_max: u32) -> BenchConfig {
    BenchConfig {
        k_min,
        k_max,
        time_budget_secs: 0.05,
        max_iterations: 500,
        ..Default::default()
    }
}

#[test]
fn single_size_all_dead_grid() {
    let mut harness = Harness::new(small_config(2, 2), zero_grid, MonotonicStopwatch).unwrap();
    let table = harness.run().unwrap();
    assert_eq!(table.len(), 1);
    let record = table.records()[0];
    assert_eq!(record.size, 4);
    assert!(record.seconds > 0.0);
    // A 4 x 4 step is far below the 50ms budget, so the cap of 500 calls bounds it
    assert!(record.seconds < 0.05);
}

#[test]
fn average_matches_a_single_call() {
    // With a fixed per-call duration the average is exactly that duration
    struct Constant;
    impl Stopwatch for Constant {
        fn measure<R, F: FnOnce() -> R>(&mut self, f: F) -> (R, Duration) {
            (f(), Duration::from_micros(40))
        }
    }
    let config = BenchConfig {
        k_min: 2,
        k_max: 2,
        ..Default::default()
    };
    let table = Harness::new(config, zero_grid, Constant).unwrap().run().unwrap();
    assert_eq!(table.len(), 1);
    assert!((table.records()[0].seconds - 40e-6).abs() < 1e-15);
}

#[test]
fn sizes_are_ascending_powers_of_two() {
    let source = RandomGrids::from_seed(Some(2024));
    let mut harness = Harness::new(small_config(2, 6), source, MonotonicStopwatch).unwrap();
    let table = harness.run().unwrap();
    let sizes: Vec<usize> = table.records().iter().map(|r| r.size).collect();
    assert_eq!(sizes, vec![4, 8, 16, 32, 64]);
    assert!(table.records().iter().all(|r| r.seconds.is_finite() && r.seconds >= 0.0));
}

#[test]
fn run_writes_csv() {
    let output = std::env::temp_dir().join(format!("gol_bench_it_{}.csv", std::process::id()));
    let config = BenchConfig {
        seed: Some(11),
        output: output.clone(),
        ..small_config(2, 4)
    };
    let table = bench::run(config).unwrap();
    let contents = fs::read_to_string(&output).unwrap();
    fs::remove_file(&output).unwrap();

    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("N,seconds"));
    let rows: Vec<(usize, f64)> = lines
        .map(|line| {
            let mut parts = line.split(',');
            let n = parts.next().unwrap().parse().unwrap();
            let secs = parts.next().unwrap().parse().unwrap();
            (n, secs)
        })
        .collect();
    assert_eq!(rows.len(), table.len());
    for (row, record) in rows.iter().zip(table.records()) {
        assert_eq!(row.0, record.size);
        assert_eq!(row.1, record.seconds);
    }
}

#[test]
fn invalid_config_writes_nothing() {
    let output = std::env::temp_dir().join(format!("gol_bench_bad_{}.csv", std::process::id()));
    let _ = fs::remove_file(&output);
    let config = BenchConfig {
        time_budget_secs: -1.0,
        output: output.clone(),
        ..small_config(2, 3)
    };
    assert!(matches!(bench::run(config), Err(BenchError::Config(_))));
    assert!(!output.exists());
}
