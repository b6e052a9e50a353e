//! The target function in logarithmic form.
//!
//! Taking logarithms of `x^n = K * m^x` on `x > 0` gives
//!
//! ```text
//! f(x)  = n ln(x) - ln(K) - x ln(m)
//! f'(x) = n / x - ln(m)
//! ```
//!
//! For `m > 1` the derivative vanishes once, at `x_limit = n / ln(m)`, and
//! `f` is concave, so `f(x_limit)` is its global maximum.

use crate::types::Job;

/// `f` and `f'` for one parameterisation, with the logarithms precomputed.
///
/// # Examples
///
/// ```
/// use poweq_core::math::PowerEquation;
///
/// // x^2 = e^x / 10
/// let eq = PowerEquation::new(2.0, std::f64::consts::E, 0.1);
/// assert!((eq.critical_point().unwrap() - 2.0).abs() < 1e-12);
/// assert!(eq.peak().unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerEquation {
    n: f64,
    ln_m: f64,
    ln_k: f64,
}

impl PowerEquation {
    /// Builds the equation `x^n = k * m^x`.
    pub fn new(n: f64, m: f64, k: f64) -> Self {
        Self {
            n,
            ln_m: m.ln(),
            ln_k: k.ln(),
        }
    }

    /// Builds the equation of a job.
    pub fn from_job(job: &Job) -> Self {
        Self::new(job.n, job.m, job.k)
    }

    /// `f(x) = n ln(x) - ln(K) - x ln(m)`.
    #[inline]
    pub fn value(&self, x: f64) -> f64 {
        self.n * x.ln() - self.ln_k - x * self.ln_m
    }

    /// `f'(x) = n / x - ln(m)`.
    #[inline]
    pub fn derivative(&self, x: f64) -> f64 {
        self.n / x - self.ln_m
    }

    /// `x_limit = n / ln(m)`, defined only for `m > 1`.
    pub fn critical_point(&self) -> Option<f64> {
        (self.ln_m > 0.0).then(|| self.n / self.ln_m)
    }

    /// `f(x_limit)`, the maximum of `f` when `m > 1`.
    pub fn peak(&self) -> Option<f64> {
        self.critical_point().map(|x| self.value(x))
    }
}

/// Residual `f(x)` of a job's equation.
pub fn residual(job: &Job, x: f64) -> f64 {
    PowerEquation::from_job(job).value(x)
}
