//! Strategy contract and per-call solve state.
//!
//! A strategy owns the update rule of a root-finding method (Newton,
//! Broyden, fixed-point, ...). The driver owns the loop. The two meet
//! through [`Strategy`], which is resolved statically: the driver is
//! generic over the strategy type and never boxes it.

use crate::flag::TerminationFlag;
use crate::linalg::Vector;
use crate::tolerance::Tolerance;
use num_traits::Float;

/// Transient state of a single solve call.
///
/// Built fresh by the driver at the start of every call and threaded
/// through each strategy operation, so the driver itself stays immutable.
/// Strategies record why they stop with [`SolveContext::set_flag`] and use
/// the tolerance predicates to decide convergence.
#[derive(Debug)]
pub struct SolveContext<'a> {
    tolerance: &'a Tolerance,
    flag: Option<TerminationFlag>,
}

impl<'a> SolveContext<'a> {
    /// Create an empty context over the given tolerances.
    pub fn new(tolerance: &'a Tolerance) -> Self {
        Self {
            tolerance,
            flag: None,
        }
    }

    /// Tolerances of the driver running this call.
    #[inline]
    pub fn tolerance(&self) -> &Tolerance {
        self.tolerance
    }

    /// Record the reason the run is about to stop.
    #[inline]
    pub fn set_flag(&mut self, flag: TerminationFlag) {
        self.flag = Some(flag);
    }

    /// Flag recorded so far, if any.
    #[inline]
    pub fn flag(&self) -> Option<TerminationFlag> {
        self.flag
    }

    pub(crate) fn clear_flag(&mut self) {
        self.flag = None;
    }

    /// See [`Tolerance::is_close`].
    #[inline]
    pub fn is_close(&self, x: f64, y: f64) -> bool {
        self.tolerance.is_close(x, y)
    }

    /// See [`Tolerance::is_zero`].
    #[inline]
    pub fn is_zero(&self, x: f64) -> bool {
        self.tolerance.is_zero(x)
    }

    /// See [`Tolerance::is_zero_vec`].
    #[inline]
    pub fn is_zero_vec<const D: usize>(&self, y: &Vector<D>, x: &Vector<D>) -> bool {
        self.tolerance.is_zero_vec(y, x)
    }

    /// See [`Tolerance::is_nan`].
    #[inline]
    pub fn is_nan<T: Float>(&self, x: &[T]) -> bool {
        self.tolerance.is_nan(x)
    }
}

/// Update rule driven by [`Driver`](crate::Driver).
///
/// # Type Parameters
///
/// * `F` - Function evaluator type, usually a closure `FnMut(&Vector<D>) -> Vector<D>`
/// * `D` - Problem dimension
///
/// # Contract
///
/// - `initialize` performs the first evaluation. Returning `false` means the
///   initial state is already degenerate and should come with a flag.
/// - `iterate` advances one step. Returning `false` means the step produced a
///   non-finite candidate or residual and should come with a flag.
/// - `has_converged` evaluates the stopping predicates and sets
///   `ResidualZero` or `DeltaXZero` when it returns `true`.
/// - `zero` and `residual` are read once, after the loop ends.
///
/// # Example
///
/// ```
/// use root_core::{SolveContext, Strategy, TerminationFlag, Vector};
///
/// /// Plain fixed-point iteration on g(x) = x - f(x).
/// struct FixedPoint<const D: usize> {
///     x: Vector<D>,
///     fx: Vector<D>,
/// }
///
/// impl<F, const D: usize> Strategy<F, D> for FixedPoint<D>
/// where
///     F: FnMut(&Vector<D>) -> Vector<D>,
/// {
///     type Args = Vector<D>;
///
///     fn initialize(&mut self, f: &mut F, x0: Vector<D>, ctx: &mut SolveContext<'_>) -> bool {
///         self.x = x0;
///         self.fx = f(&self.x);
///         self.check(ctx)
///     }
///
///     fn iterate(&mut self, f: &mut F, ctx: &mut SolveContext<'_>) -> bool {
///         for (x, fx) in self.x.iter_mut().zip(self.fx.iter()) {
///             *x -= fx;
///         }
///         self.fx = f(&self.x);
///         self.check(ctx)
///     }
///
///     fn has_converged(&self, ctx: &mut SolveContext<'_>) -> bool {
///         let done = ctx.is_zero_vec(&self.fx, &self.x);
///         if done {
///             ctx.set_flag(TerminationFlag::ResidualZero);
///         }
///         done
///     }
///
///     fn zero(&self) -> Vector<D> {
///         self.x
///     }
///
///     fn residual(&self) -> Vector<D> {
///         self.fx
///     }
/// }
///
/// impl<const D: usize> FixedPoint<D> {
///     fn check(&self, ctx: &mut SolveContext<'_>) -> bool {
///         if ctx.is_nan(&self.x) {
///             ctx.set_flag(TerminationFlag::ZeroIsNonfinite);
///             return false;
///         }
///         if ctx.is_nan(&self.fx) {
///             ctx.set_flag(TerminationFlag::FunctionIsNonfinite);
///             return false;
///         }
///         true
///     }
/// }
/// ```
pub trait Strategy<F, const D: usize> {
    /// Auxiliary inputs forwarded unchanged from `solve` to `initialize`,
    /// such as an initial guess or a Jacobian evaluator.
    type Args;

    /// Prepare the initial candidate and residual.
    fn initialize(&mut self, f: &mut F, args: Self::Args, ctx: &mut SolveContext<'_>) -> bool;

    /// Advance one step.
    fn iterate(&mut self, f: &mut F, ctx: &mut SolveContext<'_>) -> bool;

    /// Evaluate the stopping predicates.
    fn has_converged(&self, ctx: &mut SolveContext<'_>) -> bool;

    /// Current candidate.
    fn zero(&self) -> Vector<D>;

    /// Function value at the current candidate.
    fn residual(&self) -> Vector<D>;
}
