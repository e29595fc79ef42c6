//! Driver configuration.

use crate::error::DriverError;
use crate::tolerance::{Tolerance, DEFAULT_ABS_TOL, DEFAULT_REL_TOL};
use serde::{Deserialize, Serialize};

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Iteration budget and tolerances of a [`Driver`](crate::Driver).
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Maximum number of iterations (default: 100)
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Absolute tolerance (default: 1e-12)
    #[serde(default = "default_abs_tol")]
    pub abs_tol: f64,
    /// Relative tolerance (default: 1e-12)
    #[serde(default = "default_rel_tol")]
    pub rel_tol: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            abs_tol: default_abs_tol(),
            rel_tol: default_rel_tol(),
        }
    }
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_abs_tol() -> f64 {
    DEFAULT_ABS_TOL
}

fn default_rel_tol() -> f64 {
    DEFAULT_REL_TOL
}

impl DriverConfig {
    /// Create a configuration from its parts.
    pub fn new(max_iterations: usize, abs_tol: f64, rel_tol: f64) -> Self {
        Self {
            max_iterations,
            abs_tol,
            rel_tol,
        }
    }

    /// Check the budget is positive and both tolerances are finite and
    /// non-negative.
    pub fn validate(&self) -> Result<(), DriverError> {
        if self.max_iterations == 0 {
            return Err(DriverError::InvalidMaxIterations);
        }
        check_tolerance("abs_tol", self.abs_tol)?;
        check_tolerance("rel_tol", self.rel_tol)?;
        Ok(())
    }

    /// Tolerance pair carried by this configuration.
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::new(self.abs_tol, self.rel_tol)
    }
}

fn check_tolerance(name: &'static str, value: f64) -> Result<(), DriverError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DriverError::InvalidTolerance { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DriverConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.abs_tol, 1e-12);
        assert_eq!(config.rel_tol, 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let config = DriverConfig::new(0, 1e-12, 1e-12);
        assert_eq!(config.validate(), Err(DriverError::InvalidMaxIterations));
    }

    #[test]
    fn test_bad_tolerances_rejected() {
        let negative = DriverConfig::new(10, -1e-3, 1e-12);
        assert!(matches!(
            negative.validate(),
            Err(DriverError::InvalidTolerance { name: "abs_tol", .. })
        ));

        let nan = DriverConfig::new(10, 1e-12, f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(DriverError::InvalidTolerance { name: "rel_tol", .. })
        ));

        let infinite = DriverConfig::new(10, f64::INFINITY, 0.0);
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_zero_tolerances_allowed() {
        assert!(DriverConfig::new(1, 0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_tolerance_view() {
        let config = DriverConfig::new(5, 1e-6, 1e-3);
        assert_eq!(config.tolerance(), Tolerance::new(1e-6, 1e-3));
    }
}
