//! Error types for calculator operations.

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("no operation selected")]
    NoOperationSelected,

    #[error("division by zero")]
    DivisionByZero,
}

/// Error returned when text does not name a known operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseOperationError {
    #[error("unknown operation '{0}' (expected add, subtract, multiply or divide)")]
    Unknown(String),
}
