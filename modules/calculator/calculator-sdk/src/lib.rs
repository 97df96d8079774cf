//! Calculator SDK
//!
//! This crate provides the contract of the calculator module:
//! - API trait (`CalculatorApi`)
//! - Operation model (`Operation`)
//! - Error types (`CalculatorError`, `ParseOperationError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorApi, Operation};
//!
//! calculator.set_operation(Operation::Multiply);
//! let product = calculator.compute(55.0, 12.0)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT ===
mod api;
pub use api::CalculatorApi;

// === MODELS ===
mod models;
pub use models::Operation;

// === ERRORS ===
mod errors;
pub use errors::{CalculatorError, ParseOperationError};
