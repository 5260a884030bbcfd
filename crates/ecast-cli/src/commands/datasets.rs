use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Result};
use ecast_core::diagnose_records;
use ecast_io::load_records;
use tabwriter::TabWriter;
use tracing::info;

use crate::commands::util::load_registry;
use ecast_cli::cli::DatasetCommands;

pub fn handle(command: &DatasetCommands, data_dir: Option<&Path>) -> Result<()> {
    match command {
        DatasetCommands::List => list(data_dir),
        DatasetCommands::Validate { file } => validate(file),
    }
}

fn list(data_dir: Option<&Path>) -> Result<()> {
    let registry = load_registry(data_dir)?;
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "ID\tNAME\tYEARS\tRECORDS")?;
    for country in registry.countries() {
        let Some(series) = registry.get(country) else {
            continue;
        };
        writeln!(
            writer,
            "{}\t{}\t{}-{}\t{}",
            country,
            registry.display_name(country),
            series.first_year(),
            series.last_year(),
            series.len()
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn validate(file: &Path) -> Result<()> {
    let records = load_records(file)?;
    let diagnostics = diagnose_records(&records);
    print!("{diagnostics}");
    if diagnostics.has_errors() {
        bail!(
            "{} is not a usable series: {}",
            file.display(),
            diagnostics.summary()
        );
    }
    info!("{} records in {} look usable", records.len(), file.display());
    Ok(())
}
