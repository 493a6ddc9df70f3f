pub mod advanced;
pub mod aggregate;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod io;
pub mod logging;
pub mod outline;
pub mod scientific;
pub mod script;
pub mod types;

pub use advanced::AdvancedCalculator;
pub use aggregate::{calculate_product, calculate_sum};
pub use calculator::{Arithmetic, Calculator};
pub use config::Settings;
pub use demo::{DemoReport, SelfCheck, run_demo, self_check};
pub use error::{CalcError, CalcResult, ErrorKind};
pub use scientific::{Computable, ScientificCalculator, SqrtPolicy};
pub use script::{Operation, Script, ScriptError, ScriptFailure, ScriptReport, Variant};
pub use types::{SymbolId, SymbolKind};
