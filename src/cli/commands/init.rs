//! Init and Config commands.

use anyhow::{Context, Result};

use super::{emit, fail};
use crate::config::{ConfigError, Settings};
use crate::io::{Envelope, ExitStatus, ResultCode};

/// Run init command - create configuration file in the current directory.
pub fn run_init(force: bool, json: bool) -> Result<ExitStatus> {
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;

    match Settings::init_config_file(&cwd, force) {
        Ok(path) => {
            let envelope = Envelope::success(path.display().to_string())
                .with_message("Created configuration file");
            emit(envelope, json, || {
                println!("Created configuration file at: {}", path.display());
                println!("Edit this file to customize your settings.");
            })
        }
        Err(e @ ConfigError::AlreadyExists(_)) => fail(ResultCode::ConfigError, &e.to_string(), json),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to write configuration file")),
    }
}

/// Run config command - display current configuration.
pub fn run_config(settings: &Settings) -> Result<ExitStatus> {
    let toml_str = toml::to_string_pretty(settings).context("Error displaying config")?;
    println!("Current Configuration:");
    println!("{}", "=".repeat(50));
    println!("{toml_str}");
    Ok(ExitStatus::Success)
}
