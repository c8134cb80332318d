use std::time::{Duration, Instant};

/// Run a function and measure its execution time.
pub fn time_fn<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Run `f` `warmup` times unmeasured, then `iterations` times measured.
///
/// Returns the results of the measured runs and their timing statistics.
pub fn benchmark_with_warmup<F, R>(warmup: usize, iterations: usize, mut f: F) -> (Vec<R>, BenchmarkStats)
where
    F: FnMut() -> R,
{
    for _ in 0..warmup {
        let _ = f();
    }

    let mut results = Vec::with_capacity(iterations);
    let mut times = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let (result, elapsed) = time_fn(&mut f);
        results.push(result);
        times.push(elapsed.as_secs_f64() * 1000.0);
    }

    (results, BenchmarkStats::from_times(times))
}

/// Statistics for benchmarking results, in milliseconds.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkStats {
    pub mean_ms: f64,
    pub std_dev_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub median_ms: f64,
}

impl BenchmarkStats {
    /// Summarises a list of times in milliseconds. Empty input gives all zeros.
    pub fn from_times(mut times: Vec<f64>) -> Self {
        if times.is_empty() {
            return Self::default();
        }
        times.sort_by(f64::total_cmp);

        let n = times.len();
        let mean = times.iter().sum::<f64>() / n as f64;
        let variance = times.iter().map(|&t| (t - mean).powi(2)).sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (times[n / 2 - 1] + times[n / 2]) / 2.0
        } else {
            times[n / 2]
        };

        Self {
            mean_ms: mean,
            std_dev_ms: variance.sqrt(),
            min_ms: times[0],
            max_ms: times[n - 1],
            median_ms: median,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_with_warmup() {
        let (results, stats) = benchmark_with_warmup(5, 10, || 42);
        assert_eq!(results.len(), 10);
        assert_eq!(results[0], 42);
        assert!(stats.std_dev_ms >= 0.0);
        assert!(stats.max_ms >= stats.min_ms);
    }

    #[test]
    fn test_benchmark_stats() {
        let stats = BenchmarkStats::from_times(vec![5.0, 1.0, 3.0, 2.0, 4.0]);
        assert!((stats.mean_ms - 3.0).abs() < 1e-12);
        assert_eq!(stats.median_ms, 3.0);
        assert_eq!(stats.min_ms, 1.0);
        assert_eq!(stats.max_ms, 5.0);
    }

    #[test]
    fn test_benchmark_stats_even_count() {
        assert_eq!(BenchmarkStats::from_times(vec![1.0, 2.0, 3.0, 4.0]).median_ms, 2.5);
    }

    #[test]
    fn test_benchmark_stats_empty() {
        assert_eq!(BenchmarkStats::from_times(Vec::new()).mean_ms, 0.0);
    }
}
