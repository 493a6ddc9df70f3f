//! Error types for calculator operations.

use serde::Serialize;
use thiserror::Error;

/// Broad classification of a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The argument itself is unacceptable (e.g. a zero divisor).
    InvalidArgument,
    /// The argument is fine but the result is undefined over the reals.
    Domain,
}

/// Errors raised by calculator operations.
///
/// A failed operation never changes the accumulator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Square root of negative value {value} is undefined")]
    NegativeSquareRoot { value: i64 },
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::DivisionByZero => ErrorKind::InvalidArgument,
            CalcError::NegativeSquareRoot { .. } => ErrorKind::Domain,
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
