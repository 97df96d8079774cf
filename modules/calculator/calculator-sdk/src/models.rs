//! Operation model
//!
//! The closed set of strategies a calculator can be switched between.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, ParseOperationError};

/// A stateless two-operand arithmetic strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Apply the operation to `a` and `b` using native `f64` arithmetic.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] for [`Operation::Divide`]
    /// when `b` is exactly zero (either sign).
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalculatorError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }

    /// Symbol used when rendering `<a> <symbol> <b> = <result>`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "/",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Accepts a name (any case) or a symbol. `*` is an alias for multiply.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "*" {
            return Ok(Self::Multiply);
        }
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(trimmed) || op.symbol() == trimmed)
            .ok_or_else(|| ParseOperationError::Unknown(s.to_owned()))
    }
}
