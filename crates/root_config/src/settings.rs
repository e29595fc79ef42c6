//! Settings structures and loading.

use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat, Map};
use root_core::{Driver, DriverConfig};
use serde::Deserialize;
use tracing::debug;

/// Environment variable prefix for overrides, e.g. `ROOT_SOLVER__ABS_TOL`.
pub const ENV_PREFIX: &str = "ROOT";

/// Environment variable naming the active profile.
pub const ENV_SELECTOR: &str = "ROOT_ENV";

/// Top-level settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Driver budget and tolerances
    #[serde(default)]
    pub solver: DriverConfig,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `ROOT_ENV`)
    /// 3. Environment variables prefixed with `ROOT_`
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var(ENV_SELECTOR).unwrap_or_else(|_| "development".into());
        debug!(environment = %env, "Loading solver settings");

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(environment(None))
            .build()?;

        Self::from_config(config)
    }

    /// Load settings from a TOML document overridden by `ROOT_`-prefixed
    /// variables taken from `vars` instead of the process environment.
    pub fn from_toml_and_vars(toml: &str, vars: Map<String, String>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .add_source(environment(Some(vars)))
            .build()?;

        Self::from_config(config)
    }

    /// Load settings from an in-memory TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.solver.validate()?;
        Ok(settings)
    }

    /// Build a driver for strategy `S` and dimension `D` from these settings.
    pub fn driver<S, const D: usize>(&self) -> Result<Driver<S, D>, ConfigError> {
        Ok(Driver::with_config(self.solver)?)
    }
}

/// `ROOT_SOLVER__ABS_TOL` maps to `solver.abs_tol`.
fn environment(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}
