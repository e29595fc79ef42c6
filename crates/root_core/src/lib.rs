//! # root_core
//!
//! Iteration scaffold for finding a zero of a vector function
//! `f: R^D -> R^D` with a fixed dimension `D`.
//!
//! The crate supplies everything a root-finding method needs except the
//! update rule itself:
//!
//! - [`Driver`]: the control loop, iteration budget and result assembly
//! - [`Strategy`]: the contract a concrete method (Newton, Broyden,
//!   fixed-point, ...) implements, resolved statically
//! - [`Tolerance`]: absolute/relative floating-point comparisons
//! - [`linalg`]: identity matrices and dot products on fixed-size arrays
//! - [`TerminationFlag`] and [`SolveResult`]: why and where a run stopped
//!
//! Numerical failure is never an error. NaN candidates, NaN function values
//! and budget exhaustion all come back as a [`SolveResult`] whose flag says
//! what happened. The only fallible operation is building a driver from an
//! invalid [`DriverConfig`].
//!
//! ## Logging
//!
//! The driver emits `tracing` events (`debug` at start and termination,
//! `trace` per pass). Install a subscriber to see them.

pub mod driver;
pub mod error;
pub mod flag;
pub mod linalg;
pub mod result;
pub mod strategy;
pub mod tolerance;

pub use driver::{Driver, DriverConfig, DEFAULT_MAX_ITERATIONS};
pub use error::DriverError;
pub use flag::TerminationFlag;
pub use linalg::{Matrix, Vector};
pub use result::SolveResult;
pub use strategy::{SolveContext, Strategy};
pub use tolerance::{is_nan, Tolerance, DEFAULT_ABS_TOL, DEFAULT_REL_TOL};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::linalg::{dot, dot_mat, identity, norm};
    pub use crate::{
        Driver, DriverConfig, DriverError, Matrix, SolveContext, SolveResult, Strategy,
        TerminationFlag, Tolerance, Vector,
    };
}
