//! Experiment runner - the size × trial measurement loop
//!
//! One experiment measures one algorithm: the outer loop walks the size
//! groups in order, the inner loop repeats `TRIALS` measurements, and each
//! measurement regenerates its input from scratch before timing a single
//! invocation. Samples accumulate strictly in iteration order.

use std::fmt;

use rand::Rng;

use crate::algorithm::Algorithm;
use crate::generate::{random_array, sorted_array};
use crate::timer;

/// Input sizes for the search experiments, and the size labels the sort
/// experiments report under.
pub const GROUPS: [usize; 5] = [10_000, 20_000, 30_000, 40_000, 50_000];

/// Fibonacci iterates these `n` values instead of [`GROUPS`].
pub const FIB_SIZES: [usize; 5] = [10, 20, 30, 40, 50];

/// Measurements per size group.
pub const TRIALS: usize = 5_000;

/// One measurement outcome: a size label and an elapsed duration.
///
/// Samples are immutable after creation. Within an experiment they are
/// accumulated append-only, so output order always matches trial order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    size: usize,
    duration_ns: u64,
}

impl Sample {
    /// Create a new sample.
    #[must_use]
    pub const fn new(size: usize, duration_ns: u64) -> Self {
        Self { size, duration_ns }
    }

    /// Get the size-group label this sample was measured under.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Get the measured duration in nanoseconds.
    #[must_use]
    pub const fn duration_ns(&self) -> u64 {
        self.duration_ns
    }
}

impl fmt::Display for Sample {
    /// Renders the plot-fragment form written to the output files:
    /// `[ <size>, <duration> ],`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {} ],", self.size, self.duration_ns)
    }
}

/// Prepare one freshly generated `(data, param)` input for a single trial.
///
/// - Searches get an array of exactly `group` elements (random permutation
///   for linear, sorted for binary) and a uniformly random value that is
///   guaranteed present.
/// - Sorts get a random permutation of `group / 10` elements; quadratic
///   sorts at the full group sizes would dominate the whole run. The
///   sample keeps the full `group` label regardless - see [`run_experiment`].
/// - Fibonacci gets no array; `group` itself is `n`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn prepare_input(algorithm: Algorithm, group: usize, rng: &mut impl Rng) -> (Vec<i32>, i32) {
    match algorithm {
        Algorithm::LinearSearch => (random_array(rng, group), rng.gen_range(0..group) as i32),
        Algorithm::BinarySearch => (sorted_array(group), rng.gen_range(0..group) as i32),
        Algorithm::BubbleSort | Algorithm::ExchangeSort => (random_array(rng, group / 10), 0),
        Algorithm::Fibonacci => (Vec::new(), group as i32),
    }
}

/// Run one experiment: `trials` timed invocations for each group in
/// `groups`, in order.
///
/// Every sample carries the group label active when it was measured, even
/// for the sorts, whose actual timed array is a tenth of the label
/// (matching the curves this harness has always produced; relabeling would
/// silently shift them an order of magnitude).
///
/// Returns `groups.len() * trials` samples in exact iteration order.
pub fn run_experiment(
    algorithm: Algorithm,
    groups: &[usize],
    trials: usize,
    rng: &mut impl Rng,
) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(groups.len() * trials);

    for &group in groups {
        tracing::info!(algorithm = algorithm.name(), group, "starting group");
        for trial in 0..trials {
            if trial % 50 == 0 {
                tracing::debug!(algorithm = algorithm.name(), group, trial, "progress");
            }
            let (mut data, param) = prepare_input(algorithm, group, rng);
            let duration_ns = timer::time(algorithm, &mut data, param);
            samples.push(Sample::new(group, duration_ns));
        }
    }

    samples
}

/// Run the full fixed-size experiment for one algorithm: [`FIB_SIZES`] for
/// Fibonacci, [`GROUPS`] for everything else, [`TRIALS`] trials per group.
pub fn run_full_experiment(algorithm: Algorithm, rng: &mut impl Rng) -> Vec<Sample> {
    let groups: &[usize] = match algorithm {
        Algorithm::Fibonacci => &FIB_SIZES,
        _ => &GROUPS,
    };
    run_experiment(algorithm, groups, TRIALS, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_accessors() {
        let sample = Sample::new(10_000, 420);
        assert_eq!(sample.size(), 10_000);
        assert_eq!(sample.duration_ns(), 420);
    }

    #[test]
    fn test_sample_display_fragment() {
        assert_eq!(Sample::new(100, 5).to_string(), "[ 100, 5 ],");
        assert_eq!(Sample::new(200, 7).to_string(), "[ 200, 7 ],");
    }

    #[test]
    fn test_single_group_sample_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let samples = run_experiment(Algorithm::LinearSearch, &[10_000], 5, &mut rng);
        assert_eq!(samples.len(), 5);
        for sample in &samples {
            assert_eq!(sample.size(), 10_000);
        }
    }

    #[test]
    fn test_groups_iterate_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let samples = run_experiment(Algorithm::BinarySearch, &[100, 200, 300], 2, &mut rng);
        let labels: Vec<usize> = samples.iter().map(Sample::size).collect();
        assert_eq!(labels, vec![100, 100, 200, 200, 300, 300]);
    }

    #[test]
    fn test_sort_input_is_tenth_of_label() {
        let mut rng = StdRng::seed_from_u64(1);
        let (data, param) = prepare_input(Algorithm::BubbleSort, 1000, &mut rng);
        assert_eq!(data.len(), 100);
        assert_eq!(param, 0);
    }

    #[test]
    fn test_search_param_is_always_present() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let (data, param) = prepare_input(Algorithm::LinearSearch, 500, &mut rng);
            assert_eq!(data.len(), 500);
            assert!((0..500).contains(&param));
        }
    }

    #[test]
    fn test_fibonacci_input_has_no_array() {
        let mut rng = StdRng::seed_from_u64(1);
        let (data, param) = prepare_input(Algorithm::Fibonacci, 30, &mut rng);
        assert!(data.is_empty());
        assert_eq!(param, 30);
    }
}
