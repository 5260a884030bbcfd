use std::io::{self, Write};
use std::path::Path;

use anyhow::{anyhow, Result};
use ecast_core::Field;
use ecast_ts::YearView;
use tabwriter::TabWriter;

use crate::commands::util::{build_engine, fmt_value, write_json, write_records_csv};
use ecast_cli::cli::OutputFormat;

pub fn handle(
    data_dir: Option<&Path>,
    horizon: u32,
    country: &str,
    year: i32,
    format: OutputFormat,
) -> Result<()> {
    let engine = build_engine(data_dir, horizon)?;
    let view = engine
        .record_for_year(country, year)
        .ok_or_else(|| anyhow!("no data for '{}' in {}", country, year))?;
    let name = engine.source().display_name(country);

    match format {
        OutputFormat::Table => print_view(&name, &view),
        OutputFormat::Json => write_json(&view),
        OutputFormat::Csv => write_records_csv(&[view.record]),
    }
}

fn print_view(name: &str, view: &YearView) -> Result<()> {
    println!("{} {} ({})", name, view.record.year, view.provenance.as_str());
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "FIELD\tVALUE")?;
    for field in Field::ALL {
        writeln!(writer, "{}\t{}", field, fmt_value(view.record.get(field)))?;
    }
    writer.flush()?;
    Ok(())
}
