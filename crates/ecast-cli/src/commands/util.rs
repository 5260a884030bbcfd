use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ecast_core::EnergyRecord;
use ecast_io::{records_to_frame, DatasetRegistry};
use ecast_ts::ForecastEngine;
use polars::prelude::{CsvWriter, SerWriter};
use serde::Serialize;

pub fn parse_list(list: Option<&str>) -> Vec<String> {
    list.unwrap_or("")
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Built-in datasets, or every dataset file in `data_dir` when given.
pub fn load_registry(data_dir: Option<&Path>) -> Result<DatasetRegistry> {
    match data_dir {
        Some(dir) => DatasetRegistry::load_dir(dir)
            .with_context(|| format!("loading datasets from {}", dir.display())),
        None => DatasetRegistry::builtin(),
    }
}

pub fn build_engine(data_dir: Option<&Path>, horizon: u32) -> Result<ForecastEngine<DatasetRegistry>> {
    Ok(ForecastEngine::new(load_registry(data_dir)?).with_horizon(horizon))
}

pub fn write_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("serializing JSON output")?;
    writeln!(stdout)?;
    Ok(())
}

pub fn write_records_csv(records: &[EnergyRecord]) -> Result<()> {
    let mut df = records_to_frame(records)?;
    CsvWriter::new(io::stdout().lock())
        .finish(&mut df)
        .context("writing CSV to stdout")
}

/// Two decimals, the precision predictions are rounded to.
pub fn fmt_value(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_skips_blanks() {
        assert_eq!(
            parse_list(Some(" tunisia, ,libya,")),
            vec!["tunisia".to_string(), "libya".to_string()]
        );
        assert!(parse_list(None).is_empty());
    }

    #[test]
    fn builtin_registry_when_no_dir() {
        let registry = load_registry(None).unwrap();
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn values_use_two_decimals() {
        assert_eq!(fmt_value(18.7), "18.70");
        assert_eq!(fmt_value(0.1), "0.10");
    }
}
