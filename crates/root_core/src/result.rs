//! Result record produced by a solve run.

use crate::flag::TerminationFlag;
use crate::linalg::Vector;

/// Outcome of one [`Driver::solve`](crate::Driver::solve) call.
///
/// Failure outcomes still carry the best candidate found; callers tell
/// success from degraded termination by the `flag` alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult<const D: usize> {
    /// Final candidate
    pub zero: Vector<D>,
    /// Function value at `zero`
    pub residual: Vector<D>,
    /// Number of `iterate` calls made, capped at the iteration budget
    pub iteration: usize,
    /// Reason the run stopped
    pub flag: TerminationFlag,
}

impl<const D: usize> SolveResult<D> {
    /// Whether the run stopped on a success flag.
    #[inline]
    pub fn converged(&self) -> bool {
        self.flag.is_success()
    }
}
