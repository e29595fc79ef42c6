//! Driver errors.

use thiserror::Error;

/// Errors raised when a driver configuration violates its contract.
///
/// Numerical conditions during a solve are never errors; they are
/// reported through [`TerminationFlag`](crate::TerminationFlag).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriverError {
    /// Iteration budget must be positive
    #[error("Invalid iteration budget: max_iterations must be positive")]
    InvalidMaxIterations,

    /// Tolerance must be finite and non-negative
    #[error("Invalid tolerance '{name}': {value} (must be finite and non-negative)")]
    InvalidTolerance { name: &'static str, value: f64 },
}
