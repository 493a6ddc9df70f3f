//! CLI module for the calculator.
//!
//! Provides command-line interface parsing and command dispatch.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, VariantArg};
pub use commands::dispatch;
