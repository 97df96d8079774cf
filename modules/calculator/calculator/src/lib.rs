//! Calculator Module
//!
//! A calculator that switches between arithmetic strategies at runtime.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Calculator context holding the active operation
//! - `scenario.rs` - Runs a sequence of selections and computations
//! - `config.rs` - Layered configuration (defaults, YAML, environment)
//! - `logging.rs` - `tracing` subscriber bootstrap
//!
//! The contract (`Operation`, `CalculatorApi`, errors) lives in `calculator-sdk`.

pub mod config;
pub mod domain;
pub mod logging;
pub mod scenario;

pub use config::{CalculatorConfig, ConfigError, LogFormat, LoggingConfig};
pub use domain::Calculator;
pub use scenario::{Step, demo_steps, format_line, run_steps};
