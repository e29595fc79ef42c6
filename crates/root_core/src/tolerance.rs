//! Tolerance-based floating-point comparisons.
//!
//! Every strategy needs the same equality and zero tests to decide when to
//! stop. They are collected on [`Tolerance`], which the driver builds once
//! from its configuration and hands to strategies through
//! [`SolveContext`](crate::SolveContext).

use crate::linalg::{norm, Vector};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Default absolute tolerance.
pub const DEFAULT_ABS_TOL: f64 = 1e-12;

/// Default relative tolerance.
pub const DEFAULT_REL_TOL: f64 = 1e-12;

/// Absolute and relative tolerance pair.
///
/// All predicates are monotone in both tolerances: shrinking either one
/// never turns a `false` into a `true`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance
    pub abs_tol: f64,
    /// Relative tolerance
    pub rel_tol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs_tol: DEFAULT_ABS_TOL,
            rel_tol: DEFAULT_REL_TOL,
        }
    }
}

impl Tolerance {
    /// Create a tolerance pair.
    pub fn new(abs_tol: f64, rel_tol: f64) -> Self {
        Self { abs_tol, rel_tol }
    }

    /// Are two numbers equal within tolerance?
    ///
    /// ```text
    /// |x - y| <= max(abs_tol, rel_tol * min(|x|, |y|))
    /// ```
    ///
    /// The relative term is scaled by the smaller magnitude, so equality is
    /// lax only when both `x` and `y` are large.
    ///
    /// # Examples
    /// ```
    /// use root_core::Tolerance;
    ///
    /// let tol = Tolerance::new(1e-12, 1e-6);
    /// assert!(tol.is_close(1e6, 1e6 + 0.5));
    /// assert!(!tol.is_close(0.0, 1e-6));
    /// ```
    #[inline]
    pub fn is_close(&self, x: f64, y: f64) -> bool {
        let scale = x.abs().min(y.abs());
        (x - y).abs() <= self.abs_tol.max(self.rel_tol * scale)
    }

    /// Is a number zero within the absolute tolerance?
    #[inline]
    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() <= self.abs_tol
    }

    /// Is the vector `y` negligible relative to `x`?
    ///
    /// ```text
    /// ||y||_2 < abs_tol + rel_tol * ||x||_2
    /// ```
    ///
    /// Typically `y` is a residual or step and `x` the current position.
    /// Rounding error grows with dimension, hence the additive bound rather
    /// than the `max` used by [`Tolerance::is_close`].
    #[inline]
    pub fn is_zero_vec<const D: usize>(&self, y: &Vector<D>, x: &Vector<D>) -> bool {
        norm(y) < self.abs_tol + self.rel_tol * norm(x)
    }

    /// Does any coordinate of `x` hold NaN?
    #[inline]
    pub fn is_nan<T: Float>(&self, x: &[T]) -> bool {
        is_nan(x)
    }
}

/// Does any coordinate of `x` hold NaN? Vacuously false when `x` is empty.
#[inline]
pub fn is_nan<T: Float>(x: &[T]) -> bool {
    x.iter().any(|v| v.is_nan())
}
