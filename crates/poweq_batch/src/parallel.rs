//! Rayon-based parallelisation utilities.
//!
//! Jobs are solved in chunks on the rayon pool. Results come back in input
//! order regardless of which chunk finishes first.

use rayon::prelude::*;

/// Jobs per rayon task.
///
/// Each job takes microseconds, so chunks amortise scheduling overhead.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Default job count below which batches run sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Processes items in parallel chunks and concatenates the results.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `batch_size` - Number of items per chunk
/// * `processor` - Function to apply to each item
///
/// # Returns
///
/// One result per item, in input order.
pub fn process_in_batches<T, R, F>(items: &[T], batch_size: usize, processor: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items
        .par_chunks(batch_size.max(1))
        .flat_map_iter(|chunk| chunk.iter().map(&processor))
        .collect()
}

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Batch size for chunked processing
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Always sequential.
    pub fn sequential() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_in_batches_keeps_order() {
        let items: Vec<i32> = (0..1000).collect();
        let doubled: Vec<i32> = process_in_batches(&items, 7, |&x| x * 2);

        assert_eq!(doubled.len(), 1000);
        assert!(doubled.iter().enumerate().all(|(i, &x)| x == 2 * i as i32));
    }

    #[test]
    fn test_zero_batch_size_is_clamped() {
        let items = [1, 2, 3];
        assert_eq!(process_in_batches(&items, 0, |&x| x + 1), vec![2, 3, 4]);
        assert_eq!(ParallelConfig::new(0, 10).batch_size, 1);
    }

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.parallel_threshold, 100);
    }

    #[test]
    fn test_should_parallelize() {
        let config = ParallelConfig::default();
        assert!(!config.should_parallelize(50));
        assert!(config.should_parallelize(100));
        assert!(!ParallelConfig::sequential().should_parallelize(1_000_000));
    }
}
