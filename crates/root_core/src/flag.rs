//! Termination flags for a solve run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason a solve run stopped.
///
/// Exactly one flag labels every terminated run. Strategies set every
/// variant except [`TerminationFlag::MaxIterations`], which only the driver
/// sets once the iteration budget is spent.
///
/// # Examples
/// ```
/// use root_core::TerminationFlag;
///
/// assert!(TerminationFlag::ResidualZero.is_success());
/// assert!(!TerminationFlag::MaxIterations.is_success());
/// assert_eq!(TerminationFlag::DeltaXZero.to_string(), "delta_x_zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationFlag {
    /// The function value is numerically zero at the candidate
    ResidualZero,
    /// Successive iterates are numerically indistinguishable
    DeltaXZero,
    /// The candidate contains NaN
    ZeroIsNonfinite,
    /// Budget exhausted without any stopping predicate holding
    MaxIterations,
    /// The function evaluation produced NaN
    FunctionIsNonfinite,
}

impl TerminationFlag {
    /// All flags, in declaration order.
    pub const ALL: [TerminationFlag; 5] = [
        TerminationFlag::ResidualZero,
        TerminationFlag::DeltaXZero,
        TerminationFlag::ZeroIsNonfinite,
        TerminationFlag::MaxIterations,
        TerminationFlag::FunctionIsNonfinite,
    ];

    /// Whether the flag denotes a converged run.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            TerminationFlag::ResidualZero | TerminationFlag::DeltaXZero
        )
    }

    /// Snake-case label of the flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationFlag::ResidualZero => "residual_zero",
            TerminationFlag::DeltaXZero => "delta_x_zero",
            TerminationFlag::ZeroIsNonfinite => "zero_is_nonfinite",
            TerminationFlag::MaxIterations => "max_iterations",
            TerminationFlag::FunctionIsNonfinite => "function_is_nonfinite",
        }
    }
}

impl fmt::Display for TerminationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
