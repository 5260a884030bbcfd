use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ecast_core::{EnergyRecord, HistoricalSeries};
use tracing::debug;

/// Parse CSV rows with a header line into records.
///
/// Headers may use the snake_case column names or the camelCase wire keys.
/// Columns missing from the header default to `0`.
pub fn parse_csv_records<R: Read>(reader: R) -> Result<Vec<EnergyRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    rdr.deserialize::<EnergyRecord>()
        .enumerate()
        .map(|(idx, row)| row.with_context(|| format!("parsing CSV row {}", idx + 2)))
        .collect()
}

/// Parse a JSON array of record objects.
pub fn parse_json_records(data: &str) -> Result<Vec<EnergyRecord>> {
    serde_json::from_str(data).context("parsing JSON records")
}

/// Load raw records from `.csv`, `.json` or (with the `parquet` feature) `.parquet`.
pub fn load_records(path: &Path) -> Result<Vec<EnergyRecord>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    let records = match extension.as_str() {
        "csv" => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            parse_csv_records(file)
        }
        "json" => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_json_records(&data)
        }
        "parquet" => crate::frame::read_frame(path)
            .and_then(|df| crate::frame::frame_to_records(&df)),
        _ => Err(anyhow!(
            "unsupported file extension '{}'; use .csv, .json or .parquet",
            extension
        )),
    }
    .with_context(|| format!("loading records from {}", path.display()))?;

    debug!(path = %path.display(), rows = records.len(), "loaded records");
    Ok(records)
}

/// Load and validate a historical series.
pub fn load_series(path: &Path) -> Result<HistoricalSeries> {
    let records = load_records(path)?;
    HistoricalSeries::new(records)
        .with_context(|| format!("validating series from {}", path.display()))
}
