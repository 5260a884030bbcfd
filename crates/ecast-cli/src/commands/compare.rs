use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use ecast_core::Field;
use ecast_ts::ComparisonEntry;
use tabwriter::TabWriter;

use crate::commands::util::{build_engine, fmt_value, parse_list, write_json};
use ecast_cli::cli::OutputFormat;

pub fn handle(
    data_dir: Option<&Path>,
    horizon: u32,
    field: Field,
    year: i32,
    countries: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let engine = build_engine(data_dir, horizon)?;
    let mut countries = parse_list(countries);
    if countries.is_empty() {
        countries = engine.source().countries().map(String::from).collect();
    }

    let entries = engine.compare(&countries, year, field);
    if entries.is_empty() {
        bail!("no country has {} data for {}", field, year);
    }

    match format {
        OutputFormat::Table => print_table(field, year, &entries),
        OutputFormat::Json => write_json(&entries),
        OutputFormat::Csv => write_csv(&entries),
    }
}

fn print_table(field: Field, year: i32, entries: &[ComparisonEntry]) -> Result<()> {
    println!("{} in {}", field, year);
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "COUNTRY\tVALUE\tRELATIVE\tMIN\tMAX\tSOURCE")?;
    for entry in entries {
        writeln!(
            writer,
            "{}\t{}\t{:.1}%\t{}\t{}\t{}",
            entry.country,
            fmt_value(entry.value),
            entry.normalized * 100.0,
            fmt_value(entry.range.min),
            fmt_value(entry.range.max),
            entry.provenance.as_str()
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn write_csv(entries: &[ComparisonEntry]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["country", "value", "normalized", "min", "max", "provenance"])?;
    for entry in entries {
        writer.write_record([
            entry.country.clone(),
            entry.value.to_string(),
            entry.normalized.to_string(),
            entry.range.min.to_string(),
            entry.range.max.to_string(),
            entry.provenance.as_str().to_string(),
        ])?;
    }
    writer.flush().context("writing CSV to stdout")?;
    Ok(())
}
