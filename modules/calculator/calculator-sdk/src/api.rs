//! Calculator API trait
//!
//! Contract trait for the calculator context object.

use crate::errors::CalculatorError;
use crate::models::Operation;

/// Calculator API trait
///
/// A context that holds at most one selected [`Operation`] and delegates
/// computation to it.
pub trait CalculatorApi {
    /// Replace the active operation. Never fails.
    fn set_operation(&mut self, op: Operation);

    /// Apply the active operation to `a` and `b`.
    ///
    /// # Errors
    /// - [`CalculatorError::NoOperationSelected`] if `set_operation` was never called.
    /// - Any error returned by the active operation, unchanged.
    fn compute(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// The operation currently selected, if any.
    fn current_operation(&self) -> Option<Operation>;
}
