//! Calculator with an operation history.

use serde::Serialize;
use tracing::debug;

use crate::calculator::{Arithmetic, Calculator};
use crate::error::CalcResult;

/// A calculator that records `add` and `subtract` calls.
///
/// The log is append-only for the lifetime of the instance; `reset` does not
/// clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdvancedCalculator {
    base: Calculator,
    history: Vec<String>,
}

impl AdvancedCalculator {
    pub fn new(initial_value: i64) -> Self {
        Self {
            base: Calculator::new(initial_value),
            history: Vec::new(),
        }
    }

    fn log_operation(&mut self, operation: String) {
        debug!(target: "advanced", "logged '{operation}'");
        self.history.push(operation);
    }

    /// Add and log the operation.
    pub fn add(&mut self, n: i64) {
        self.base.add(n);
        self.log_operation(format!("add {n}"));
    }

    /// Subtract and log the operation.
    pub fn subtract(&mut self, n: i64) {
        self.base.subtract(n);
        self.log_operation(format!("subtract {n}"));
    }

    pub fn multiply(&mut self, n: i64) {
        self.base.multiply(n);
    }

    pub fn divide(&self, n: i64) -> CalcResult<f64> {
        self.base.divide(n)
    }

    pub fn value(&self) -> i64 {
        self.base.value()
    }

    pub fn reset(&mut self) {
        self.base.reset();
    }

    /// Copy of the operation log in call order.
    pub fn history(&self) -> Vec<String> {
        self.history.clone()
    }
}

impl Arithmetic for AdvancedCalculator {
    fn add(&mut self, n: i64) {
        AdvancedCalculator::add(self, n)
    }

    fn subtract(&mut self, n: i64) {
        AdvancedCalculator::subtract(self, n)
    }

    fn multiply(&mut self, n: i64) {
        AdvancedCalculator::multiply(self, n)
    }

    fn divide(&self, n: i64) -> CalcResult<f64> {
        AdvancedCalculator::divide(self, n)
    }

    fn value(&self) -> i64 {
        AdvancedCalculator::value(self)
    }

    fn reset(&mut self) {
        AdvancedCalculator::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_logged() {
        let mut calc = AdvancedCalculator::new(200);
        calc.add(100);
        assert_eq!(calc.value(), 300);
        assert_eq!(calc.history(), vec!["add 100"]);
    }

    #[test]
    fn test_history_order() {
        let mut calc = AdvancedCalculator::default();
        calc.add(1);
        calc.subtract(-2);
        calc.add(3);
        assert_eq!(calc.history(), vec!["add 1", "subtract -2", "add 3"]);
        assert_eq!(calc.value(), 6);
    }

    #[test]
    fn test_only_add_and_subtract_are_logged() {
        let mut calc = AdvancedCalculator::new(2);
        calc.multiply(4);
        calc.divide(2).unwrap();
        calc.reset();
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_history_is_a_copy() {
        let mut calc = AdvancedCalculator::new(0);
        calc.add(5);

        let mut snapshot = calc.history();
        snapshot.push("tampered".to_string());
        calc.subtract(1);

        assert_eq!(snapshot, vec!["add 5", "tampered"]);
        assert_eq!(calc.history(), vec!["add 5", "subtract 1"]);
    }
}
