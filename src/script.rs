//! Operation scripts applied to a single calculator.
//!
//! A script is a list of textual operations such as `add:5`, `sqrt` or
//! `history`. [`Script::parse`] checks every operation against the chosen
//! [`Variant`] before anything runs, so a script either executes from the
//! start or is rejected as a whole. Execution stops at the first failing
//! operation and reports the steps that completed.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::advanced::AdvancedCalculator;
use crate::calculator::{Arithmetic, Calculator};
use crate::error::{CalcError, CalcResult};
use crate::scientific::{ScientificCalculator, SqrtPolicy};

/// Which calculator a script runs against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Basic,
    Scientific,
    Advanced,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Scientific => "scientific",
            Variant::Advanced => "advanced",
        }
    }

    pub fn supports(&self, operation: Operation) -> bool {
        match operation {
            Operation::StoreMemory
            | Operation::RecallMemory
            | Operation::ClearMemory
            | Operation::SquareRoot => *self == Variant::Scientific,
            Operation::History => *self == Variant::Advanced,
            _ => true,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add(i64),
    Subtract(i64),
    Multiply(i64),
    Divide(i64),
    Value,
    Reset,
    StoreMemory,
    RecallMemory,
    ClearMemory,
    SquareRoot,
    History,
}

impl Operation {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add(_) => "add",
            Operation::Subtract(_) => "sub",
            Operation::Multiply(_) => "mul",
            Operation::Divide(_) => "div",
            Operation::Value => "value",
            Operation::Reset => "reset",
            Operation::StoreMemory => "store",
            Operation::RecallMemory => "recall",
            Operation::ClearMemory => "clear",
            Operation::SquareRoot => "sqrt",
            Operation::History => "history",
        }
    }

    fn operand(&self) -> Option<i64> {
        match self {
            Operation::Add(n) | Operation::Subtract(n) | Operation::Multiply(n) | Operation::Divide(n) => {
                Some(*n)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(n) => write!(f, "{}:{n}", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

impl FromStr for Operation {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, operand) = match s.trim().split_once(':') {
            Some((name, operand)) => (name.trim(), Some(operand.trim())),
            None => (s.trim(), None),
        };
        let name = name.to_ascii_lowercase();

        let with_operand = || -> Result<i64, ScriptError> {
            let operand = operand.ok_or_else(|| ScriptError::MissingOperand {
                operation: name.clone(),
            })?;
            operand.parse::<i64>().map_err(|e| ScriptError::InvalidOperand {
                operation: name.clone(),
                operand: operand.to_string(),
                reason: e.to_string(),
            })
        };
        let without_operand = |op: Operation| match operand {
            Some(_) => Err(ScriptError::UnexpectedOperand {
                operation: name.clone(),
            }),
            None => Ok(op),
        };

        match name.as_str() {
            "add" => Ok(Operation::Add(with_operand()?)),
            "sub" | "subtract" => Ok(Operation::Subtract(with_operand()?)),
            "mul" | "multiply" => Ok(Operation::Multiply(with_operand()?)),
            "div" | "divide" => Ok(Operation::Divide(with_operand()?)),
            "value" | "get" => without_operand(Operation::Value),
            "reset" => without_operand(Operation::Reset),
            "store" => without_operand(Operation::StoreMemory),
            "recall" => without_operand(Operation::RecallMemory),
            "clear" => without_operand(Operation::ClearMemory),
            "sqrt" => without_operand(Operation::SquareRoot),
            "history" => without_operand(Operation::History),
            _ => Err(ScriptError::UnknownOperation(s.to_string())),
        }
    }
}

/// Reasons a script is rejected before it runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("Operation '{operation}' needs an integer operand, e.g. {operation}:5")]
    MissingOperand { operation: String },

    #[error("Operation '{operation}' takes no operand")]
    UnexpectedOperand { operation: String },

    #[error("Invalid operand '{operand}' for '{operation}': {reason}")]
    InvalidOperand {
        operation: String,
        operand: String,
        reason: String,
    },

    #[error("Operation '{operation}' is not supported by the {variant} calculator")]
    Unsupported { operation: String, variant: Variant },
}

/// Observable output of a single step.
///
/// JSON has no number for NaN or the infinities, so those serialize as the
/// strings `"NaN"`, `"inf"` and `"-inf"`, matching the text output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepOutput {
    Integer(i64),
    Float(#[serde(serialize_with = "serialize_float")] f64),
    History(Vec<String>),
}

fn serialize_float<S: Serializer>(x: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if x.is_finite() {
        serializer.serialize_f64(*x)
    } else {
        serializer.collect_str(x)
    }
}

impl fmt::Display for StepOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutput::Integer(n) => write!(f, "{n}"),
            StepOutput::Float(x) => write!(f, "{x}"),
            StepOutput::History(entries) => write!(f, "{entries:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub operation: String,
    /// Accumulator after the step
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<StepOutput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptReport {
    pub variant: Variant,
    pub initial: i64,
    pub steps: Vec<Step>,
    pub final_value: i64,
}

/// A step failed; `partial` holds everything that ran before it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Step {step} ({operation}) failed: {source}")]
pub struct ScriptFailure {
    /// 1-based index of the failing operation
    pub step: usize,
    pub operation: String,
    pub source: CalcError,
    pub partial: ScriptReport,
}

/// A validated list of operations for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    variant: Variant,
    operations: Vec<Operation>,
}

impl Script {
    pub fn new(variant: Variant, operations: Vec<Operation>) -> Result<Self, ScriptError> {
        if let Some(op) = operations.iter().find(|op| !variant.supports(**op)) {
            return Err(ScriptError::Unsupported {
                operation: op.name().to_string(),
                variant,
            });
        }
        Ok(Self {
            variant,
            operations,
        })
    }

    pub fn parse<S: AsRef<str>>(variant: Variant, ops: &[S]) -> Result<Self, ScriptError> {
        let operations = ops
            .iter()
            .map(|op| op.as_ref().parse())
            .collect::<Result<Vec<Operation>, _>>()?;
        Self::new(variant, operations)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Run every operation on a fresh calculator seeded with `initial`.
    pub fn execute(&self, initial: i64, sqrt_policy: SqrtPolicy) -> Result<ScriptReport, ScriptFailure> {
        let mut unit = Unit::new(self.variant, initial, sqrt_policy);
        let mut report = ScriptReport {
            variant: self.variant,
            initial,
            steps: Vec::with_capacity(self.operations.len()),
            final_value: initial,
        };

        for (index, op) in self.operations.iter().enumerate() {
            match unit.apply(*op) {
                Ok(output) => {
                    report.final_value = unit.arithmetic().value();
                    report.steps.push(Step {
                        operation: op.to_string(),
                        value: report.final_value,
                        output,
                    });
                }
                Err(source) => {
                    return Err(ScriptFailure {
                        step: index + 1,
                        operation: op.to_string(),
                        source,
                        partial: report,
                    });
                }
            }
        }

        Ok(report)
    }
}

enum Unit {
    Basic(Calculator),
    Scientific(ScientificCalculator),
    Advanced(AdvancedCalculator),
}

impl Unit {
    fn new(variant: Variant, initial: i64, sqrt_policy: SqrtPolicy) -> Self {
        match variant {
            Variant::Basic => Unit::Basic(Calculator::new(initial)),
            Variant::Scientific => {
                Unit::Scientific(ScientificCalculator::new(initial).with_sqrt_policy(sqrt_policy))
            }
            Variant::Advanced => Unit::Advanced(AdvancedCalculator::new(initial)),
        }
    }

    fn arithmetic(&mut self) -> &mut dyn Arithmetic {
        match self {
            Unit::Basic(calc) => calc,
            Unit::Scientific(calc) => calc,
            Unit::Advanced(calc) => calc,
        }
    }

    fn apply(&mut self, op: Operation) -> CalcResult<Option<StepOutput>> {
        let output = match (self, op) {
            (unit, Operation::Add(n)) => {
                unit.arithmetic().add(n);
                None
            }
            (unit, Operation::Subtract(n)) => {
                unit.arithmetic().subtract(n);
                None
            }
            (unit, Operation::Multiply(n)) => {
                unit.arithmetic().multiply(n);
                None
            }
            (unit, Operation::Divide(n)) => Some(StepOutput::Float(unit.arithmetic().divide(n)?)),
            (unit, Operation::Value) => Some(StepOutput::Integer(unit.arithmetic().value())),
            (unit, Operation::Reset) => {
                unit.arithmetic().reset();
                None
            }
            (Unit::Scientific(calc), Operation::StoreMemory) => {
                calc.store_memory();
                None
            }
            (Unit::Scientific(calc), Operation::RecallMemory) => {
                Some(StepOutput::Integer(calc.recall_memory()))
            }
            (Unit::Scientific(calc), Operation::ClearMemory) => {
                calc.clear_memory();
                None
            }
            (Unit::Scientific(calc), Operation::SquareRoot) => {
                Some(StepOutput::Float(calc.compute_square_root()?))
            }
            (Unit::Advanced(calc), Operation::History) => Some(StepOutput::History(calc.history())),
            (_, op) => unreachable!("'{op}' passed variant validation"),
        };
        Ok(output)
    }
}
