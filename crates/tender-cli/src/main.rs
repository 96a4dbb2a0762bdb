//! tender - account and profile CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in; the session is stored in .tender/session.json
//! tender login --email ada@example.com --password '...'
//!
//! # Show the profile
//! tender me --pretty
//!
//! # Upload a resume and pre-fill contact details from it
//! tender upload-resume ./cv.pdf --parse
//! ```

use tender_cli::{Cli, CliError, logger, run};
use tender_config::{Config, LogLevel};

use std::process::ExitCode;

use clap::Parser;
use serde_json::json;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_dir = match Config::config_dir() {
        Ok(dir) => dir,
        Err(e) => return report(&CliError::from(e)),
    };
    let mut config = match Config::load_from(&config_dir) {
        Ok(config) => config,
        Err(e) => return report(&CliError::from(e)),
    };

    // Flags win over config.toml and environment
    if let Some(server) = &cli.server {
        config.api.base_url = server.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = LogLevel::parse_lenient(level);
    }

    if let Err(e) = config.validate() {
        return report(&CliError::from(e));
    }
    if let Err(e) = logger::initialize(&config.logging) {
        return report(&e);
    }
    config.log_summary();

    let outcome = run(cli.command, config, config_dir).await;

    match outcome.result {
        Ok(value) => {
            let value = if cli.diagnostics {
                json!({ "result": value, "diagnostics": outcome.diagnostics })
            } else {
                value
            };

            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            if cli.diagnostics {
                if let Ok(entries) = serde_json::to_string_pretty(&outcome.diagnostics) {
                    eprintln!("{}", entries);
                }
            }
            report(&e)
        }
    }
}

fn report(e: &CliError) -> ExitCode {
    eprintln!("Error [{}]: {}", e.code(), e);
    ExitCode::FAILURE
}
