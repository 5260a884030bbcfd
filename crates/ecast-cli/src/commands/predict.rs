use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use ecast_core::{EnergyRecord, Field};
use ecast_io::{records_to_frame, write_frame};
use tabwriter::TabWriter;
use tracing::{info, warn};

use crate::commands::util::{build_engine, fmt_value, write_json, write_records_csv};
use ecast_cli::cli::OutputFormat;

pub fn handle(
    data_dir: Option<&Path>,
    country: &str,
    years: u32,
    format: OutputFormat,
    out: Option<&str>,
) -> Result<()> {
    let engine = build_engine(data_dir, years)?;
    if engine.series(country).is_none() {
        warn!("no dataset registered for '{}'; nothing to predict", country);
        return Ok(());
    }
    let predictions = engine.predictions(country);

    match format {
        OutputFormat::Table => print_table(&predictions)?,
        OutputFormat::Json => write_json(&*predictions)?,
        OutputFormat::Csv => write_records_csv(&predictions)?,
    }

    if let Some(out) = out {
        let path = Path::new(out);
        let mut df = records_to_frame(&predictions)?;
        write_frame(&mut df, path)?;
        info!("wrote {} predictions to {}", predictions.len(), path.display());
    }
    Ok(())
}

fn print_table(records: &[EnergyRecord]) -> Result<()> {
    let mut writer = TabWriter::new(io::stdout());
    let header: Vec<&str> = Field::ALL.iter().map(|f| f.column_name()).collect();
    writeln!(writer, "year\t{}", header.join("\t"))?;
    for record in records {
        let values: Vec<String> = Field::ALL.iter().map(|&f| fmt_value(record.get(f))).collect();
        writeln!(writer, "{}\t{}", record.year, values.join("\t"))?;
    }
    writer.flush()?;
    Ok(())
}
