//! Configuration errors.

use root_core::DriverError;
use thiserror::Error;

/// Errors that can occur during settings loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Loaded values violate the driver contract
    #[error("Invalid solver configuration: {0}")]
    InvalidSolver(#[from] DriverError),

    /// Underlying config crate error
    #[error("Configuration error: {0}")]
    ConfigCrateError(#[from] config::ConfigError),
}
