//! # root_config
//!
//! Settings loading for the `root_core` driver.
//!
//! Driver budgets and tolerances are read from layered TOML files and
//! environment variables, validated, and turned into ready-to-use
//! [`Driver`](root_core::Driver) instances.
//!
//! ## Example
//!
//! ```rust,ignore
//! use root_config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Iteration budget: {}", settings.solver.max_iterations);
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{Settings, ENV_PREFIX, ENV_SELECTOR};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ConfigError, Settings};
}
