use std::time::{Duration, Instant};

use crate::{ChangeError, exact, greedy};

/// Amounts the benchmark sweeps, ascending.
pub const AMOUNTS: [u64; 5] = [100, 1_000, 10_000, 100_000, 1_000_000];

/// Timings from one sweep. The three vectors are index-aligned: `greedy[i]`
/// and `exact[i]` are the elapsed times for `amounts[i]`.
#[derive(Debug, Clone)]
pub struct BenchmarkResults {
    pub amounts: Vec<u64>,
    pub greedy: Vec<Duration>,
    pub exact: Vec<Duration>,
}

/// Run `f` once and return its result together with the elapsed wall time.
/// `Instant` is monotonic, so clock adjustments cannot skew the sample.
pub fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Time one greedy and one exact call per amount. Single sample each, no
/// warmup and no averaging, so individual numbers are noisy; the spread
/// across amounts is what the report is after.
pub fn run(amounts: &[u64]) -> Result<BenchmarkResults, ChangeError> {
    let mut results = BenchmarkResults {
        amounts: amounts.to_vec(),
        greedy: Vec::with_capacity(amounts.len()),
        exact: Vec::with_capacity(amounts.len()),
    };

    for &amount in amounts {
        let (_, elapsed) = time(|| greedy::make_change(amount));
        log::debug!("greedy amount={} elapsed={:?}", amount, elapsed);
        results.greedy.push(elapsed);

        let (outcome, elapsed) = time(|| exact::make_change(amount));
        outcome?;
        log::debug!("exact amount={} elapsed={:?}", amount, elapsed);
        results.exact.push(elapsed);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_passes_value_through() {
        let (value, elapsed) = time(|| 40 + 2);
        assert_eq!(value, 42);
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_sequences_stay_aligned() {
        let amounts = [0, 37, 500];
        let results = run(&amounts).unwrap();
        assert_eq!(results.amounts, amounts);
        assert_eq!(results.greedy.len(), amounts.len());
        assert_eq!(results.exact.len(), amounts.len());
    }

    #[test]
    fn test_solver_error_aborts_the_sweep() {
        let err = run(&[100, crate::MAX_AMOUNT + 1]).unwrap_err();
        assert!(matches!(err, ChangeError::AmountTooLarge { .. }));
    }
}
