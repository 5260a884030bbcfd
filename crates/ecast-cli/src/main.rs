use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use crate::commands::{compare, completions, datasets, fields, predict, show, timeline};
use ecast_cli::cli::{Cli, Commands};
use ecast_cli::config::load_config;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ecast: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let level = match cli.log_level {
        Some(level) => level,
        None => match config.logging.level() {
            Ok(level) => level,
            Err(e) => {
                eprintln!("ecast: {e:#}");
                return ExitCode::FAILURE;
            }
        },
    };

    // Logs go to stderr so table/JSON/CSV output on stdout stays clean.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("ecast: a global tracing subscriber is already installed");
    }

    let Some(command) = &cli.command else {
        info!("No subcommand provided. Use `ecast --help` for more information.");
        return ExitCode::SUCCESS;
    };

    let data_dir: Option<PathBuf> = cli.data_dir.clone().or_else(|| config.data.data_dir());
    let data_dir = data_dir.as_deref();
    let horizon = config.forecast.horizon;

    let (name, result) = match command {
        Commands::Predict {
            country,
            years,
            format,
            out,
        } => {
            let years = years.unwrap_or(horizon);
            info!("Predicting {} for {} years", country, years);
            (
                "Prediction",
                predict::handle(data_dir, country, years, *format, out.as_deref()),
            )
        }
        Commands::Show {
            country,
            year,
            format,
        } => (
            "Show",
            show::handle(data_dir, horizon, country, *year, *format),
        ),
        Commands::Timeline { country, field } => (
            "Timeline",
            timeline::handle(data_dir, horizon, country, *field),
        ),
        Commands::Compare {
            field,
            year,
            countries,
            format,
        } => (
            "Comparison",
            compare::handle(
                data_dir,
                horizon,
                *field,
                *year,
                countries.as_deref(),
                *format,
            ),
        ),
        Commands::Datasets { command } => ("Dataset command", datasets::handle(command, data_dir)),
        Commands::Fields => ("Fields", fields::handle()),
        Commands::Completions { shell, out } => (
            "Completion generation",
            completions::handle(*shell, out.as_deref()),
        ),
    };

    report(name, result)
}

fn report(name: &str, result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => {
            info!("{} successful!", name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{} failed: {:?}", name, e);
            ExitCode::FAILURE
        }
    }
}
