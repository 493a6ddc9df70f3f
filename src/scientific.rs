//! Calculator with a memory register and square root.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculator::{Arithmetic, Calculator};
use crate::error::{CalcError, CalcResult};

/// What [`ScientificCalculator::compute_square_root`] does with a negative
/// accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqrtPolicy {
    /// Fail with [`CalcError::NegativeSquareRoot`].
    #[default]
    Error,
    /// Return `f64::NAN`.
    Nan,
}

/// Something that yields a single computed result and can be reset.
pub trait Computable {
    fn compute(&self) -> CalcResult<f64>;
    fn reset(&mut self);
}

/// A calculator with memory functionality.
///
/// The memory register is independent of the accumulator: only
/// [`clear_memory`](Self::clear_memory) or this type's own `reset` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScientificCalculator {
    base: Calculator,
    memory: i64,
    #[serde(skip)]
    sqrt_policy: SqrtPolicy,
}

impl ScientificCalculator {
    pub fn new(initial_value: i64) -> Self {
        Self {
            base: Calculator::new(initial_value),
            memory: 0,
            sqrt_policy: SqrtPolicy::default(),
        }
    }

    pub fn with_sqrt_policy(mut self, policy: SqrtPolicy) -> Self {
        self.sqrt_policy = policy;
        self
    }

    /// Store current value in memory.
    pub fn store_memory(&mut self) {
        self.memory = self.base.value();
        debug!(target: "scientific", "stored {} in memory", self.memory);
    }

    /// Recall value from memory.
    pub fn recall_memory(&self) -> i64 {
        self.memory
    }

    pub fn clear_memory(&mut self) {
        self.memory = 0;
    }

    pub fn add(&mut self, n: i64) {
        self.base.add(n);
    }

    pub fn subtract(&mut self, n: i64) {
        self.base.subtract(n);
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

    /// Reset the accumulator, then the memory register.
    pub fn reset(&mut self) {
        self.base.reset();
        self.clear_memory();
    }

    /// Square root of the current value.
    pub fn compute_square_root(&self) -> CalcResult<f64> {
        let value = self.base.value();
        if value < 0 {
            return match self.sqrt_policy {
                SqrtPolicy::Error => {
                    warn!(target: "scientific", "rejected square root of {value}");
                    Err(CalcError::NegativeSquareRoot { value })
                }
                SqrtPolicy::Nan => Ok(f64::NAN),
            };
        }
        Ok((value as f64).sqrt())
    }
}

impl Arithmetic for ScientificCalculator {
    fn add(&mut self, n: i64) {
        ScientificCalculator::add(self, n)
    }

    fn subtract(&mut self, n: i64) {
        ScientificCalculator::subtract(self, n)
    }

    fn multiply(&mut self, n: i64) {
        ScientificCalculator::multiply(self, n)
    }

    fn divide(&self, n: i64) -> CalcResult<f64> {
        ScientificCalculator::divide(self, n)
    }

    fn value(&self) -> i64 {
        ScientificCalculator::value(self)
    }

    fn reset(&mut self) {
        ScientificCalculator::reset(self)
    }
}

impl Computable for ScientificCalculator {
    fn compute(&self) -> CalcResult<f64> {
        self.compute_square_root()
    }

    fn reset(&mut self) {
        ScientificCalculator::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_store_and_recall() {
        let mut calc = ScientificCalculator::new(100);
        calc.add(50);
        calc.store_memory();
        assert_eq!(calc.recall_memory(), 150);

        calc.subtract(150);
        assert_eq!(calc.value(), 0);
        assert_eq!(calc.recall_memory(), 150, "memory survives accumulator changes");
    }

    #[test]
    fn test_reset_clears_memory() {
        let mut calc = ScientificCalculator::new(12);
        calc.store_memory();
        calc.reset();
        assert_eq!(calc.value(), 0);
        assert_eq!(calc.recall_memory(), 0);
    }

    #[test]
    fn test_clear_memory_keeps_value() {
        let mut calc = ScientificCalculator::new(8);
        calc.store_memory();
        calc.clear_memory();
        assert_eq!(calc.recall_memory(), 0);
        assert_eq!(calc.value(), 8);
    }

    #[test]
    fn test_square_root() {
        let calc = ScientificCalculator::new(144);
        assert_eq!(calc.compute_square_root().unwrap(), 12.0);
        assert_eq!(ScientificCalculator::new(0).compute_square_root().unwrap(), 0.0);
    }

    #[test]
    fn test_negative_square_root_is_domain_error() {
        let calc = ScientificCalculator::new(-4);
        let err = calc.compute_square_root().unwrap_err();
        assert_eq!(err, CalcError::NegativeSquareRoot { value: -4 });
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_negative_square_root_nan_policy() {
        let calc = ScientificCalculator::new(-4).with_sqrt_policy(SqrtPolicy::Nan);
        assert!(calc.compute_square_root().unwrap().is_nan());
    }

    #[test]
    fn test_computable_resets_memory() {
        let mut calc = ScientificCalculator::new(49);
        calc.store_memory();
        assert_eq!(calc.compute().unwrap(), 7.0);

        Computable::reset(&mut calc);
        assert_eq!(calc.recall_memory(), 0);
    }

    #[test]
    fn test_divide_forwards_to_base() {
        let calc = ScientificCalculator::new(9);
        assert_eq!(calc.divide(3).unwrap(), 3.0);
        assert_eq!(calc.divide(0), Err(CalcError::DivisionByZero));
    }
}
