#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::process::ExitCode;

use args::{Args, Command};
use clap::Parser;
use groundwork_config::Config;
use groundwork_core::{HttpError, to_error};
use serde_json::{Map, Value};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Initialize telemetry
    groundwork_telemetry::init(&config.logging, args.log_filter.as_deref())?;

    tracing::info!(
        config_path = ?args.config,
        "starting groundwork"
    );

    match args.command {
        Command::Validate { fields } => {
            let report = validate(&config, fields)?;
            println!("{}", report.output);
            Ok(if report.passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Encode { alphabet, text } => {
            let alphabet = alphabet.unwrap_or(config.codec.alphabet);
            println!("{}", alphabet.encode(text));
            Ok(ExitCode::SUCCESS)
        }
        Command::Status { code, message } => {
            println!("{}", status(code, message.as_deref())?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Outcome of the `validate` command
struct Report {
    passed: bool,
    output: String,
}

fn validate(config: &Config, fields: Vec<(String, String)>) -> anyhow::Result<Report> {
    if config.fields.is_empty() {
        tracing::warn!("no field rules configured, nothing to validate");
    }

    let mut input = Map::new();
    for (name, value) in fields {
        if config.fields.get(&name).is_none() {
            tracing::warn!(field = %name, "no rule configured for field");
        }
        input.insert(name, Value::String(value));
    }

    match config.fields.validate(&Value::Object(input)) {
        Ok(()) => Ok(Report {
            passed: true,
            output: "ok".to_owned(),
        }),
        Err(error) => {
            tracing::debug!(trace = error.trace(), "validation failed");
            Ok(Report {
                passed: false,
                output: serde_json::to_string(&error.to_body())?,
            })
        }
    }
}

/// JSON body of the error a status code maps to
fn status(code: u16, message: Option<&str>) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&to_error(code, message).to_body())?)
}
