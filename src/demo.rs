//! Demo routine and self-check.

use serde::Serialize;

use crate::advanced::AdvancedCalculator;
use crate::calculator::Calculator;
use crate::scientific::ScientificCalculator;

/// Observable results of [`run_demo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub result: i64,
    pub scientific_memory: i64,
    pub history: Vec<String>,
}

impl DemoReport {
    /// Console rendering: the result line followed by the history.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Result: {}", self.result),
            format!("{:?}", self.history),
        ]
    }
}

/// Exercise each calculator variant once.
pub fn run_demo() -> DemoReport {
    let mut calc = Calculator::new(10);
    calc.add(5);
    calc.multiply(2);
    let result = calc.value();

    let mut sci_calc = ScientificCalculator::new(100);
    sci_calc.add(50);
    sci_calc.store_memory();

    let mut adv_calc = AdvancedCalculator::new(200);
    adv_calc.add(100);

    DemoReport {
        result,
        scientific_memory: sci_calc.recall_memory(),
        history: adv_calc.history(),
    }
}

/// Outcome of [`self_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelfCheck {
    pub expected: i64,
    pub actual: i64,
}

impl SelfCheck {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// A fresh calculator plus one must equal one.
pub fn self_check() -> SelfCheck {
    let mut test_calc = Calculator::default();
    test_calc.add(1);
    SelfCheck {
        expected: 1,
        actual: test_calc.value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_report() {
        let report = run_demo();
        assert_eq!(report.result, 30);
        assert_eq!(report.scientific_memory, 150);
        assert_eq!(report.history, vec!["add 100"]);
        assert_eq!(report.lines(), vec!["Result: 30", "[\"add 100\"]"]);
    }

    #[test]
    fn test_self_check_passes() {
        assert!(self_check().passed());
    }
}
