//! Domain service for calculator
//!
//! Contains the calculator context that forwards computations to the
//! currently selected operation.

use calculator_sdk::{CalculatorApi, CalculatorError, Operation};
use tracing::{debug, warn};

/// Calculator context.
///
/// Holds at most one selected [`Operation`]. Starts with nothing selected;
/// [`CalculatorApi::set_operation`] moves it to the selected state, where it
/// stays.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    operation: Option<Operation>,
}

impl Calculator {
    /// Create a calculator with no operation selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with `op` already selected.
    #[must_use]
    pub fn with_operation(op: Operation) -> Self {
        Self {
            operation: Some(op),
        }
    }
}

impl CalculatorApi for Calculator {
    fn set_operation(&mut self, op: Operation) {
        debug!(operation = %op, previous = ?self.operation, "operation selected");
        self.operation = Some(op);
    }

    fn compute(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        let Some(op) = self.operation else {
            warn!(a, b, "compute called without a selected operation");
            return Err(CalculatorError::NoOperationSelected);
        };

        debug!(operation = %op, a, b, "performing computation");
        op.apply(a, b).inspect_err(|e| {
            warn!(operation = %op, a, b, error = %e, "computation failed");
        })
    }

    fn current_operation(&self) -> Option<Operation> {
        self.operation
    }
}
