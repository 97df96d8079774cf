//! Layered configuration for the calculator binary.
//!
//! Sources, lowest to highest precedence:
//! 1. built-in defaults
//! 2. YAML file (optional, `--config`)
//! 3. environment variables prefixed with `CALCULATOR__` (`__` separates nested keys)
//!
//! CLI overrides are applied by the caller on the loaded value.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::scenario::{Step, demo_steps};

/// Prefix for environment overrides, e.g. `CALCULATOR__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "CALCULATOR__";

/// Configuration loading error
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("invalid configuration: {0}")]
    Invalid(#[source] Box<figment::Error>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive when neither `RUST_LOG` nor `-v` is given.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Effective configuration of the calculator binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub logging: LoggingConfig,
    /// Steps executed by the `demo` command.
    pub scenario: Vec<Step>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            scenario: demo_steps(),
        }
    }
}

impl CalculatorConfig {
    /// Load defaults, then the YAML file at `path` (if any), then environment overrides.
    ///
    /// # Errors
    /// - [`ConfigError::NotFound`] if `path` is given but is not a file.
    /// - [`ConfigError::Invalid`] if any source fails to parse or has unknown keys.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    /// Apply `-v` verbosity on top of the loaded level. Zero keeps the configured level.
    pub fn apply_verbosity(&mut self, verbose: u8) {
        let level = match verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut self.logging.level);
    }
}
