use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;
use ecast_core::Field;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level (overrides the config file)
    #[arg(long)]
    pub log_level: Option<tracing::Level>,

    /// Path to a TOML configuration file
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory of dataset files (.csv/.json) used instead of the built-in datasets
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Forecast every indicator for the years after the historical data
    Predict {
        /// Country identifier (e.g. tunisia)
        country: String,
        /// Number of years to project (defaults to the configured horizon)
        #[arg(long)]
        years: Option<u32>,
        /// Output format for stdout
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Also write the predictions to a file (CSV or Parquet)
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Show one year of data, historical or predicted
    Show {
        country: String,
        #[arg(long)]
        year: i32,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print one indicator across history and forecast with year-over-year trend
    Timeline {
        country: String,
        /// Indicator name (camelCase or snake_case)
        #[arg(long)]
        field: Field,
    },
    /// Compare one indicator across countries, normalized per country
    Compare {
        #[arg(long)]
        field: Field,
        #[arg(long)]
        year: i32,
        /// Countries to include (comma separated, defaults to all registered)
        #[arg(long)]
        countries: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Dataset utilities
    Datasets {
        #[command(subcommand)]
        command: DatasetCommands,
    },
    /// List indicator names and their forecast models
    Fields,
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DatasetCommands {
    /// List registered countries and their year coverage
    List,
    /// Check a dataset file and print diagnostics
    Validate {
        /// Dataset file (CSV, JSON or Parquet)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
