//! Synthetic job generation.
//!
//! Parameters are drawn on a grid of hundredths:
//!
//! | field      | range                  |
//! |------------|------------------------|
//! | `n`        | 0.10 ..= 10.09         |
//! | `m`        | 1.10 ..= 6.09          |
//! | `K`        | 0.01 ..= 10000.00      |
//! | `a`        | 1e-6                   |
//! | `b`        | 10 ..= 1000009 (whole) |
//! | `tol`      | 1e-6                   |
//! | `max_iter` | 10 ..= 100             |
//!
//! Draws that fail the existence check are discarded, so every generated
//! job has at least one real root somewhere on `x > 0`.

use poweq_core::analysis::existence;
use poweq_core::types::Job;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded source of random jobs.
#[derive(Debug, Clone)]
pub struct JobGenerator {
    rng: StdRng,
}

impl JobGenerator {
    /// Reproducible generator.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draws until a job passes the existence check.
    pub fn next_job(&mut self, id: i64) -> Job {
        loop {
            let job = self.draw(id);
            if existence(&job) {
                return job;
            }
        }
    }

    /// Jobs with ids `1..=count`.
    pub fn generate(&mut self, count: usize) -> Vec<Job> {
        (1..=count as i64).map(|id| self.next_job(id)).collect()
    }

    fn draw(&mut self, id: i64) -> Job {
        let n = self.rng.gen_range(10..1010) as f64 / 100.0;
        let m = self.rng.gen_range(110..610) as f64 / 100.0;
        let k = self.rng.gen_range(1..=1_000_000) as f64 / 100.0;
        let b = self.rng.gen_range(10..1_000_010) as f64;
        let max_iter = self.rng.gen_range(10..=100);

        Job::new(id, n, m, k, 1e-6, b)
            .with_tolerance(1e-6)
            .with_max_iter(max_iter)
    }
}

/// Generates `count` jobs, reproducibly if `seed` is given.
pub fn generate(count: usize, seed: Option<u64>) -> Vec<Job> {
    let mut generator = match seed {
        Some(seed) => JobGenerator::from_seed(seed),
        None => JobGenerator::from_entropy(),
    };
    generator.generate(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use poweq_core::analysis::validate;

    #[test]
    fn test_same_seed_same_jobs() {
        assert_eq!(generate(20, Some(7)), generate(20, Some(7)));
    }

    #[test]
    fn test_ids_are_sequential() {
        let jobs = generate(50, Some(1));
        assert_eq!(jobs.len(), 50);
        assert!(jobs.iter().enumerate().all(|(i, j)| j.id == i as i64 + 1));
    }

    #[test]
    fn test_jobs_are_valid_and_in_range() {
        for job in generate(200, Some(42)) {
            assert!(validate(&job).is_ok(), "{:?}", job);
            assert!(existence(&job));
            assert!((0.10..=10.09).contains(&job.n));
            assert!((1.10..=6.09).contains(&job.m));
            assert!((0.01..=10000.0).contains(&job.k));
            assert!((10.0..=1_000_009.0).contains(&job.b));
            assert!((10..=100).contains(&job.max_iter));
            assert_eq!(job.a, 1e-6);
            assert_eq!(job.tol, 1e-6);
        }
    }

    #[test]
    fn test_zero_count() {
        assert!(generate(0, Some(3)).is_empty());
    }
}
