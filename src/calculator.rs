//! Base arithmetic unit.
//!
//! [`Calculator`] owns a single integer accumulator. The extended variants in
//! [`crate::scientific`] and [`crate::advanced`] wrap a `Calculator` and
//! forward to it through the [`Arithmetic`] trait, adding their own
//! bookkeeping after the base behaviour runs.
//!
//! # Overflow
//!
//! `add`, `subtract` and `multiply` use two's-complement wrapping arithmetic,
//! so they are total over `i64` and behave the same in debug and release
//! builds.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CalcError, CalcResult};

/// Capability set shared by every calculator variant.
pub trait Arithmetic {
    /// Add `n` to the accumulator.
    fn add(&mut self, n: i64);

    /// Subtract `n` from the accumulator.
    fn subtract(&mut self, n: i64);

    /// Multiply the accumulator by `n`.
    fn multiply(&mut self, n: i64);

    /// Divide the accumulator by `n` without changing it.
    fn divide(&self, n: i64) -> CalcResult<f64>;

    /// Current accumulator value.
    fn value(&self) -> i64;

    /// Reset to zero. Variants may clear additional state.
    fn reset(&mut self);
}

/// A simple calculator holding one integer accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Calculator {
    value: i64,
}

impl Calculator {
    pub fn new(initial_value: i64) -> Self {
        Self {
            value: initial_value,
        }
    }

    pub fn add(&mut self, n: i64) {
        self.value = self.value.wrapping_add(n);
        debug!(target: "calculator", "add {n} -> {}", self.value);
    }

    pub fn subtract(&mut self, n: i64) {
        self.value = self.value.wrapping_sub(n);
        debug!(target: "calculator", "subtract {n} -> {}", self.value);
    }

    pub fn multiply(&mut self, n: i64) {
        self.value = self.value.wrapping_mul(n);
        debug!(target: "calculator", "multiply {n} -> {}", self.value);
    }

    /// Divide the current value by `n` as floating point.
    ///
    /// Fails with [`CalcError::DivisionByZero`] when `n == 0`.
    pub fn divide(&self, n: i64) -> CalcResult<f64> {
        if n == 0 {
            warn!(target: "calculator", "rejected division of {} by zero", self.value);
            return Err(CalcError::DivisionByZero);
        }
        Ok(self.value as f64 / n as f64)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
        debug!(target: "calculator", "reset");
    }
}

impl Arithmetic for Calculator {
    fn add(&mut self, n: i64) {
        Calculator::add(self, n)
    }

    fn subtract(&mut self, n: i64) {
        Calculator::subtract(self, n)
    }

    fn multiply(&mut self, n: i64) {
        Calculator::multiply(self, n)
    }

    fn divide(&self, n: i64) -> CalcResult<f64> {
        Calculator::divide(self, n)
    }

    fn value(&self) -> i64 {
        Calculator::value(self)
    }

    fn reset(&mut self) {
        Calculator::reset(self)
    }
}
