use std::time::{Duration, Instant};

/// Wall-clock collaborator: times a single call.
pub trait Stopwatch {
    fn measure<R, F: FnOnce() -> R>(&mut self, f: F) -> (R, Duration);
}

/// Monotonic timer backed by `Instant`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicStopwatch;

impl Stopwatch for MonotonicStopwatch {
    #[inline]
    fn measure<R, F: FnOnce() -> R>(&mut self, f: F) -> (R, Duration) {
        let start = Instant::now();
        let result = f();
        (result, start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_measures_at_least_the_sleep() {
        let mut stopwatch = MonotonicStopwatch;
        let (value, elapsed) = stopwatch.measure(|| {
            thread::sleep(Duration::from_millis(5));
            42
        });
        assert_eq!(value, 42);
        assert!(elapsed >= Duration::from_millis(5));
    }
}
