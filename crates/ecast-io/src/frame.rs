//! Tabular export and import of record sequences through polars.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ecast_core::{EnergyRecord, Field};
use polars::prelude::*;
#[cfg(feature = "parquet")]
use polars::prelude::{ParquetReader, ParquetWriter};

/// Build a frame with a `year` column followed by one column per field.
pub fn records_to_frame(records: &[EnergyRecord]) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(Field::ALL.len() + 1);
    columns.push(Series::new(
        "year",
        records.iter().map(|r| r.year).collect::<Vec<i32>>(),
    ));
    for field in Field::ALL {
        columns.push(Series::new(
            field.column_name(),
            records.iter().map(|r| r.get(field)).collect::<Vec<f64>>(),
        ));
    }
    DataFrame::new(columns).context("building record frame")
}

/// Inverse of [`records_to_frame`]. Missing field columns and null cells read as 0.
pub fn frame_to_records(df: &DataFrame) -> Result<Vec<EnergyRecord>> {
    let years = df
        .column("year")
        .context("frame has no 'year' column")?
        .cast(&DataType::Int32)
        .context("casting year column to Int32")?;
    let years = years.i32()?;

    let mut records = Vec::with_capacity(df.height());
    for (idx, year) in years.into_iter().enumerate() {
        let year = year.ok_or_else(|| anyhow!("null year in row {}", idx))?;
        records.push(EnergyRecord::new(year));
    }

    for field in Field::ALL {
        let Ok(column) = df.column(field.column_name()) else {
            continue;
        };
        let values = column
            .cast(&DataType::Float64)
            .with_context(|| format!("casting {} to Float64", field.column_name()))?;
        for (record, value) in records.iter_mut().zip(values.f64()?.into_iter()) {
            record.set(field, value.unwrap_or(0.0));
        }
    }

    Ok(records)
}

pub fn read_frame(path: &Path) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();
    let mut file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    match extension.as_str() {
        #[cfg(feature = "parquet")]
        "parquet" => {
            let reader = ParquetReader::new(&mut file);
            reader.finish().context("reading Parquet file")
        }
        #[cfg(not(feature = "parquet"))]
        "parquet" => Err(anyhow!(
            "parquet support is disabled; rebuild with the 'parquet' feature"
        )),
        "csv" => {
            let reader = CsvReader::new(&mut file);
            reader.has_header(true).finish().context("reading CSV file")
        }
        _ => Err(anyhow!(
            "unsupported file extension '{}'; use .csv or .parquet",
            extension
        )),
    }
}

/// Write `df` to `path`, choosing the format from the extension.
/// Parent directories are created as needed.
pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        #[cfg(feature = "parquet")]
        Some("parquet") => {
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(&mut file)
                .finish(df)
                .map(|_| ())
                .context("writing Parquet file")
        }
        #[cfg(not(feature = "parquet"))]
        Some("parquet") => Err(anyhow!(
            "parquet support is disabled; rebuild with the 'parquet' feature"
        )),
        Some("csv") => {
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file)
                .finish(df)
                .context("writing CSV file")
        }
        _ => Err(anyhow!(
            "unsupported output extension for {}; use .csv or .parquet",
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<EnergyRecord> {
        vec![
            EnergyRecord::new(2026)
                .with(Field::Gdp, 54.1)
                .with(Field::RenewableShare, 18.72),
            EnergyRecord::new(2027)
                .with(Field::Gdp, 55.9)
                .with(Field::RenewableShare, 22.95),
        ]
    }

    #[test]
    fn frame_has_year_and_every_field() {
        let df = records_to_frame(&sample()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 14);
        assert!(df.column("renewable_share").is_ok());
    }

    #[test]
    fn csv_export_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("predictions.csv");
        let mut df = records_to_frame(&sample()).unwrap();
        write_frame(&mut df, &path).unwrap();

        let back = frame_to_records(&read_frame(&path).unwrap()).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[1].year, 2027);
        assert!((back[1].renewable_share - 22.95).abs() < 1e-9);
    }

    #[test]
    fn missing_columns_default_to_zero() {
        let df = df![
            "year" => &[2000i32, 2001],
            "gdp" => &[1.0f64, 2.0],
        ]
        .unwrap();
        let records = frame_to_records(&df).unwrap();
        assert_eq!(records[1].gdp, 2.0);
        assert_eq!(records[1].investment, 0.0);
    }

    #[test]
    fn rejects_unknown_output_extension() {
        let dir = tempdir().unwrap();
        let mut df = records_to_frame(&sample()).unwrap();
        assert!(write_frame(&mut df, &dir.path().join("out.xlsx")).is_err());
    }
}
