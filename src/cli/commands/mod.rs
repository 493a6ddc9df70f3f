//! Command implementations for the CLI.
//!
//! Each command prints its own output and returns the process exit status.
//! `anyhow` errors are reserved for failures outside the calculator itself,
//! such as writing the settings file.

pub mod calc;
pub mod demo;
pub mod init;
pub mod outline;

use anyhow::Result;
use serde::Serialize;

use crate::cli::args::Commands;
use crate::config::Settings;
use crate::io::{Envelope, ExitStatus, ResultCode};

/// Run one parsed command against loaded settings.
pub fn dispatch(command: Commands, settings: &Settings, json: bool) -> Result<ExitStatus> {
    match command {
        Commands::Demo => demo::run_demo(json),
        Commands::SelfCheck => demo::run_self_check(json),
        Commands::Sum { numbers, initial } => calc::run_sum(&numbers, initial, settings, json),
        Commands::Product { numbers, initial } => {
            calc::run_product(&numbers, initial, settings, json)
        }
        Commands::Run {
            variant,
            initial,
            ops,
        } => calc::run_script(variant.into(), initial, &ops, settings, json),
        Commands::Outline => outline::run_outline(json),
        Commands::Init { force } => init::run_init(force, json),
        Commands::Config => init::run_config(settings),
    }
}

/// Print a success envelope, or run `text` for plain output.
pub(crate) fn emit<T: Serialize>(envelope: Envelope<T>, json: bool, text: impl FnOnce()) -> Result<ExitStatus> {
    if json {
        println!("{}", envelope.to_json()?);
    } else {
        text();
    }
    Ok(ExitStatus::Success)
}

/// Report a failure on stdout (JSON) or stderr (text).
pub(crate) fn fail(code: ResultCode, message: &str, json: bool) -> Result<ExitStatus> {
    let envelope: Envelope<()> = Envelope::error(code, message);
    if json {
        println!("{}", envelope.to_json()?);
    } else {
        eprintln!("Error: {message}");
    }
    Ok(ExitStatus::for_result(code))
}
