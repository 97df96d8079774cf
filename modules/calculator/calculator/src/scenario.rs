//! Scenario runner
//!
//! A scenario is an ordered list of steps; each step selects an operation and
//! computes on two operands, printing `<a> <symbol> <b> = <result>`.

use std::io::Write;

use anyhow::Context;
use calculator_sdk::{CalculatorApi, Operation};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
}

impl Step {
    #[must_use]
    pub const fn new(operation: Operation, a: f64, b: f64) -> Self {
        Self { operation, a, b }
    }
}

/// The built-in demo sequence.
#[must_use]
pub fn demo_steps() -> Vec<Step> {
    vec![
        Step::new(Operation::Add, 45.0, 15.0),
        Step::new(Operation::Subtract, 10.0, 5.0),
        Step::new(Operation::Multiply, 55.0, 12.0),
        Step::new(Operation::Divide, 45.0, 5.0),
    ]
}

/// Render one result line. Integral values print without a fractional part.
#[must_use]
pub fn format_line(step: &Step, result: f64) -> String {
    format!(
        "{} {} {} = {result}",
        step.a,
        step.operation.symbol(),
        step.b
    )
}

/// Select and compute every step in order, writing one line per step to `out`.
///
/// Returns the number of steps completed. Stops at the first failure; the
/// `CalculatorError` stays reachable via `downcast_ref`.
///
/// # Errors
/// Returns the first computation error (with the failing step as context) or
/// any I/O error from `out`.
pub fn run_steps<C, W>(calculator: &mut C, steps: &[Step], out: &mut W) -> anyhow::Result<usize>
where
    C: CalculatorApi + ?Sized,
    W: Write + ?Sized,
{
    for (index, step) in steps.iter().enumerate() {
        calculator.set_operation(step.operation);
        let result = calculator.compute(step.a, step.b).with_context(|| {
            format!(
                "step {}: {} {} {} failed",
                index + 1,
                step.a,
                step.operation.symbol(),
                step.b
            )
        })?;
        writeln!(out, "{}", format_line(step, result)).context("failed to write result")?;
    }

    info!(steps = steps.len(), "scenario completed");
    Ok(steps.len())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::Calculator;
    use calculator_sdk::CalculatorError;

    fn run_to_string(steps: &[Step]) -> (anyhow::Result<usize>, String) {
        let mut calc = Calculator::new();
        let mut out = Vec::new();
        let result = run_steps(&mut calc, steps, &mut out);
        (result, String::from_utf8(out).expect("output is utf-8"))
    }

    #[test]
    fn test_demo_output() {
        let (result, output) = run_to_string(&demo_steps());
        assert_eq!(result.unwrap(), 4);
        assert_eq!(
            output,
            "45 + 15 = 60\n10 - 5 = 5\n55 x 12 = 660\n45 / 5 = 9\n"
        );
    }

    #[test]
    fn test_format_line_fractional_and_negative() {
        assert_eq!(
            format_line(&Step::new(Operation::Divide, 1.0, 4.0), 0.25),
            "1 / 4 = 0.25"
        );
        assert_eq!(
            format_line(&Step::new(Operation::Subtract, -5.0, 3.0), -8.0),
            "-5 - 3 = -8"
        );
    }

    #[test]
    fn test_format_line_keeps_float_display() {
        assert_eq!(
            format_line(&Step::new(Operation::Multiply, -1.0, 0.0), -0.0),
            "-1 x 0 = -0"
        );
        assert_eq!(
            format_line(&Step::new(Operation::Multiply, f64::MAX, 2.0), f64::INFINITY),
            format!("{} x 2 = inf", f64::MAX)
        );
    }

    #[test]
    fn test_stops_at_first_failure() {
        let steps = [
            Step::new(Operation::Add, 1.0, 2.0),
            Step::new(Operation::Divide, 1.0, 0.0),
            Step::new(Operation::Multiply, 3.0, 3.0),
        ];
        let (result, output) = run_to_string(&steps);

        assert_eq!(output, "1 + 2 = 3\n");
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<CalculatorError>(),
            Some(&CalculatorError::DivisionByZero)
        );
        assert!(err.to_string().contains("step 2: 1 / 0 failed"));
    }

    #[test]
    fn test_empty_scenario() {
        let (result, output) = run_to_string(&[]);
        assert_eq!(result.unwrap(), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_runs_through_trait_object() {
        let mut calc = Calculator::new();
        let api: &mut dyn CalculatorApi = &mut calc;
        let mut out = Vec::new();
        run_steps(api, &[Step::new(Operation::Multiply, 2.5, 4.0)], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2.5 x 4 = 10\n");
        assert_eq!(calc.current_operation(), Some(Operation::Multiply));
    }
}
