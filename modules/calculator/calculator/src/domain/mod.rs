//! Domain layer for calculator module
//!
//! Contains the calculator context that delegates to the selected operation.

pub mod service;

pub use service::Calculator;
