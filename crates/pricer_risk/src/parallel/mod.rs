//! Rayon-based parallelisation utilities.
//!
//! Sweep and surface samples are independent of each other, so the generators
//! hand their outer loops to [`ParallelConfig::map`]. Results come back in
//! input order whichever path is taken.

use rayon::prelude::*;

/// Default number of pricer evaluations before parallelism kicks in.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Parallel map preserving input order.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `mapper` - Function to apply to each item
///
/// # Returns
///
/// Vector of mapped results.
pub fn parallel_map<T, R, F>(items: &[T], mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(mapper).collect()
}

/// Configuration for parallel execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum pricer evaluations before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Configuration that never parallelises.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns whether to use parallel processing for the given evaluation count.
    #[inline]
    pub fn should_parallelize(&self, evaluations: usize) -> bool {
        evaluations >= self.parallel_threshold
    }

    /// Maps `items` in order, in parallel when `evaluations` reaches the threshold.
    pub fn map<T, R, F>(&self, items: &[T], evaluations: usize, mapper: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if self.should_parallelize(evaluations) {
            parallel_map(items, mapper)
        } else {
            items.iter().map(mapper).collect()
        }
    }
}
