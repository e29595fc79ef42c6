//! Generic iteration loop.
//!
//! [`Driver`] runs the control loop shared by every root-finding method and
//! turns the final strategy state into a [`SolveResult`]. The update rule is
//! supplied by a [`Strategy`], bound statically through the type parameter.

mod config;

pub use config::{DriverConfig, DEFAULT_MAX_ITERATIONS};

use crate::error::DriverError;
use crate::flag::TerminationFlag;
use crate::result::SolveResult;
use crate::strategy::{SolveContext, Strategy};
use crate::tolerance::{is_nan, Tolerance};
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace, warn};

/// Why a strategy stopped the loop early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Invalid,
    Converged,
}

/// Root-finding driver for dimension `D`, bound to strategy type `S`.
///
/// Holds only immutable configuration; every call to [`Driver::solve`]
/// builds its own [`SolveContext`]. A driver can therefore be reused for
/// any number of solves and shared between threads, as long as each thread
/// brings its own strategy value.
///
/// # Example
///
/// ```
/// use root_core::{Driver, DriverConfig, SolveContext, Strategy, TerminationFlag, Vector};
///
/// // Newton's method on the diagonal system x_i^2 - c_i = 0.
/// struct DiagonalNewton<const D: usize> {
///     x: Vector<D>,
///     fx: Vector<D>,
/// }
///
/// impl<F, const D: usize> Strategy<F, D> for DiagonalNewton<D>
/// where
///     F: FnMut(&Vector<D>) -> Vector<D>,
/// {
///     type Args = Vector<D>;
///
///     fn initialize(&mut self, f: &mut F, x0: Vector<D>, _ctx: &mut SolveContext<'_>) -> bool {
///         self.x = x0;
///         self.fx = f(&self.x);
///         true
///     }
///
///     fn iterate(&mut self, f: &mut F, ctx: &mut SolveContext<'_>) -> bool {
///         for (x, fx) in self.x.iter_mut().zip(self.fx.iter()) {
///             *x -= fx / (2.0 * *x);
///         }
///         self.fx = f(&self.x);
///         if ctx.is_nan(&self.x) {
///             ctx.set_flag(TerminationFlag::ZeroIsNonfinite);
///             return false;
///         }
///         true
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
///     fn zero(&self) -> Vector<D> { self.x }
///     fn residual(&self) -> Vector<D> { self.fx }
/// }
///
/// let driver = Driver::<DiagonalNewton<2>, 2>::with_config(DriverConfig::new(50, 1e-12, 1e-12)).unwrap();
/// let mut newton = DiagonalNewton { x: [0.0; 2], fx: [0.0; 2] };
///
/// let result = driver.solve(&mut newton, |x: &Vector<2>| [x[0] * x[0] - 2.0, x[1] * x[1] - 9.0], [1.0, 1.0]);
/// assert_eq!(result.flag, TerminationFlag::ResidualZero);
/// assert!((result.zero[0] - 2f64.sqrt()).abs() < 1e-10);
/// assert!((result.zero[1] - 3.0).abs() < 1e-10);
/// ```
pub struct Driver<S, const D: usize> {
    max_iterations: usize,
    tolerance: Tolerance,
    _strategy: PhantomData<fn() -> S>,
}

impl<S, const D: usize> Driver<S, D> {
    const POSITIVE_DIMENSION: () = assert!(D > 0, "driver dimension must be positive");

    /// Create a driver with the default budget (100) and tolerances (1e-12).
    pub fn new() -> Self {
        Self::from_valid(DriverConfig::default())
    }

    /// Create a driver with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] if the budget is zero or a tolerance is
    /// negative or non-finite.
    pub fn with_config(config: DriverConfig) -> Result<Self, DriverError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: DriverConfig) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::POSITIVE_DIMENSION;
        Self {
            max_iterations: config.max_iterations,
            tolerance: config.tolerance(),
            _strategy: PhantomData,
        }
    }

    /// Configuration of this driver.
    pub fn config(&self) -> DriverConfig {
        DriverConfig::new(
            self.max_iterations,
            self.tolerance.abs_tol,
            self.tolerance.rel_tol,
        )
    }

    /// Iteration budget.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Tolerances handed to strategies.
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Find a zero of `f` with `strategy`.
    ///
    /// Calls `initialize` once, then up to `max_iterations + 1` passes of
    /// `iterate` followed by `has_converged`. The returned `iteration` is the
    /// number of `iterate` calls made before the stop (`0` when `initialize`
    /// already failed), capped at `max_iterations`.
    ///
    /// Numerical trouble never panics or errors: it is reported through the
    /// result's [`TerminationFlag`].
    ///
    /// # Arguments
    ///
    /// * `strategy` - Update rule; its state is overwritten by `initialize`
    /// * `f` - Function evaluator passed to every strategy call
    /// * `args` - Auxiliary inputs forwarded unchanged to `initialize`
    pub fn solve<F>(&self, strategy: &mut S, mut f: F, args: S::Args) -> SolveResult<D>
    where
        S: Strategy<F, D>,
    {
        let mut ctx = SolveContext::new(&self.tolerance);
        debug!(
            dimension = D,
            max_iterations = self.max_iterations,
            abs_tol = self.tolerance.abs_tol,
            rel_tol = self.tolerance.rel_tol,
            "Starting solve"
        );

        let (iteration, stop) = self.run(strategy, &mut f, args, &mut ctx);

        let zero = strategy.zero();
        let residual = strategy.residual();
        let flag = match (stop, ctx.flag()) {
            (None, _) => TerminationFlag::MaxIterations,
            (Some(_), Some(flag)) => flag,
            (Some(stop), None) => {
                let inferred = self.infer_flag(stop, &zero, &residual);
                warn!(
                    iteration,
                    flag = %inferred,
                    "Strategy stopped without a termination flag; inferred one"
                );
                inferred
            }
        };

        debug!(iteration, flag = %flag, "Solve terminated");
        SolveResult {
            zero,
            residual,
            iteration,
            flag,
        }
    }

    /// Alias for [`Driver::solve`].
    #[inline]
    pub fn find_root<F>(&self, strategy: &mut S, f: F, args: S::Args) -> SolveResult<D>
    where
        S: Strategy<F, D>,
    {
        self.solve(strategy, f, args)
    }

    /// Runs the passes; `None` means the budget ran out.
    fn run<F>(
        &self,
        strategy: &mut S,
        f: &mut F,
        args: S::Args,
        ctx: &mut SolveContext<'_>,
    ) -> (usize, Option<Stop>)
    where
        S: Strategy<F, D>,
    {
        if !strategy.initialize(f, args, ctx) {
            return (0, Some(Stop::Invalid));
        }

        for pass in 0..=self.max_iterations {
            ctx.clear_flag();
            let iteration = (pass + 1).min(self.max_iterations);

            if !strategy.iterate(f, ctx) {
                return (iteration, Some(Stop::Invalid));
            }
            if strategy.has_converged(ctx) {
                return (iteration, Some(Stop::Converged));
            }
            trace!(pass, "Pass completed");
        }

        (self.max_iterations, None)
    }

    fn infer_flag(&self, stop: Stop, zero: &[f64; D], residual: &[f64; D]) -> TerminationFlag {
        match stop {
            Stop::Invalid if is_nan(zero) => TerminationFlag::ZeroIsNonfinite,
            Stop::Invalid => TerminationFlag::FunctionIsNonfinite,
            Stop::Converged if self.tolerance.is_zero_vec(residual, zero) => {
                TerminationFlag::ResidualZero
            }
            Stop::Converged => TerminationFlag::DeltaXZero,
        }
    }
}

impl<S, const D: usize> Default for Driver<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, const D: usize> Clone for Driver<S, D> {
    fn clone(&self) -> Self {
        Self {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            _strategy: PhantomData,
        }
    }
}

impl<S, const D: usize> fmt::Debug for Driver<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("dimension", &D)
            .field("strategy", &std::any::type_name::<S>())
            .field("max_iterations", &self.max_iterations)
            .field("tolerance", &self.tolerance)
            .finish()
    }
}
