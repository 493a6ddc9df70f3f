use clap::Parser;
use sample_calc::cli::{Cli, dispatch};
use sample_calc::config::Settings;
use sample_calc::io::{Envelope, ExitStatus, ResultCode};
use sample_calc::{debug_event, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) if !path.exists() => {
            return report_config_error(
                &format!("Configuration file not found: {}", path.display()),
                cli.json,
            );
        }
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => return report_config_error(&e.to_string(), cli.json),
    };

    logging::init_with_config(&settings.logging);
    debug_event!("config", "loaded", "{settings:?}");

    match dispatch(cli.command, &settings, cli.json) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(ExitStatus::Usage.code())
        }
    }
}

fn report_config_error(message: &str, json: bool) -> ExitCode {
    let envelope: Envelope<()> = Envelope::error(ResultCode::ConfigError, message);
    match envelope.to_json() {
        Ok(body) if json => println!("{body}"),
        _ => eprintln!("Configuration error: {message}"),
    }
    ExitCode::from(envelope.exit_code)
}
