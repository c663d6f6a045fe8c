use anyhow::anyhow;
use clap::Parser;

use calculator::cli::commands;
use calculator::cli::{Cli, Commands};
use calculator::config::{OutputFormat, Settings};
use calculator::io::{Envelope, ExitCode, ResultCode};
use calculator::{Calculator, logging};

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    match &cli.config {
        Some(path) => Settings::load_from(path)
            .map_err(|e| anyhow!("failed to load configuration from {}: {e}", path.display())),
        None => Settings::load().map_err(|e| anyhow!("failed to load configuration: {e}")),
    }
}

/// `--json` wins over `output.format` from settings.
fn output_format(json: bool, settings: &Settings) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        settings.output.format
    }
}

/// Load settings, start logging, then run `command`.
///
/// A configuration failure is reported as a JSON error envelope on stdout
/// when `--json` was given, and as plain text on stderr otherwise.
fn with_settings(cli: &Cli, json: bool, command: impl FnOnce(&Settings) -> ExitCode) -> ExitCode {
    let settings = match load_settings(cli) {
        Ok(settings) => settings,
        Err(e) => {
            let message = format!("Configuration error: {e:#}");
            if json {
                return commands::print_envelope(&Envelope::<()>::error(
                    ResultCode::ConfigError,
                    message,
                ));
            }
            eprintln!("{message}");
            return ExitCode::GeneralError;
        }
    };
    logging::init_with_config(&settings.logging);
    tracing::debug!("[cli] loaded settings version {}", settings.version);

    command(&settings)
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let code = match &cli.command {
        // Init must work even when the existing settings file is broken
        Commands::Init { force } => {
            logging::init();
            commands::init::run_init(*force)
        }
        Commands::Calculate {
            operation,
            a,
            b,
            json,
        } => with_settings(&cli, *json, |settings| {
            commands::calculate::run(
                &Calculator::new(),
                operation,
                *a,
                *b,
                output_format(*json, settings),
            )
        }),
        Commands::Demo { json } => with_settings(&cli, *json, |settings| {
            commands::demo::run(&Calculator::new(), output_format(*json, settings))
        }),
        Commands::Config => with_settings(&cli, false, commands::init::run_config),
    };

    code.into()
}
