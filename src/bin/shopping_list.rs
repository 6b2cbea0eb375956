// ABOUTME: Shopping list CLI - renders the shopping list of a meal plan snapshot
// ABOUTME: Reads a query result from a file or stdin, aggregates it, prints JSON, TOON, or text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors
//!
//! Usage:
//! ```bash
//! # Printable checklist from a saved query result
//! shopping-list plan.json --format text
//!
//! # Pretty JSON from stdin, repeated meals multiplied out
//! cat plan.json | shopping-list - --pretty --multiply
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mealplan_core::errors::{AppResult, ErrorResponse};
use mealplan_shopping::aggregation::aggregate_response;
use mealplan_shopping::config::ShoppingListConfig;
use mealplan_shopping::formatters::{
    format_output, format_output_pretty, MultiplierStyle, OutputFormat, RenderOptions,
    ShoppingListDocument,
};
use mealplan_shopping::logging::LoggingConfig;
use mealplan_shopping::snapshot::read_snapshot;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "shopping-list",
    about = "Meal plan shopping list generator",
    long_about = "Merges the ingredients of every meal in a meal plan into one deduplicated shopping list."
)]
struct Cli {
    /// Meal plan query result (JSON); use '-' for stdin
    snapshot: PathBuf,

    /// Output format: json, toon or text (overrides SHOPPING_LIST_FORMAT)
    #[arg(long, short = 'f')]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Multiply numeric quantities of repeated meals instead of appending xN
    #[arg(long)]
    multiply: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            let code = e.code.exit_code();
            let response = ErrorResponse::from(e);
            match serde_json::to_string(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let mut config = ShoppingListConfig::load()?;
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if cli.pretty {
        config.pretty = true;
    }
    if cli.multiply {
        config.multiplier_style = MultiplierStyle::Multiply;
    }

    let response = read_snapshot(&cli.snapshot)?;
    let aggregation = aggregate_response(&response)?;
    let document = ShoppingListDocument::build(
        response.meal_plan.as_ref(),
        &aggregation,
        &RenderOptions::from(&config),
    );

    let output = if config.pretty {
        format_output_pretty(&document, config.output_format)?
    } else {
        format_output(&document, config.output_format)?
    };

    info!(
        rows = document.rows.len(),
        format = %output.format,
        content_type = output.content_type,
        "Rendered shopping list"
    );

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output.data)?;
    stdout.flush()?;
    Ok(())
}
