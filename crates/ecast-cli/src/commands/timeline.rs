use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Result};
use ecast_core::Field;
use ecast_ts::Trend;
use tabwriter::TabWriter;

use crate::commands::util::{build_engine, fmt_value};

pub fn handle(data_dir: Option<&Path>, horizon: u32, country: &str, field: Field) -> Result<()> {
    let engine = build_engine(data_dir, horizon)?;
    let timeline = engine.timeline(country);
    if timeline.is_empty() {
        bail!("no dataset registered for '{}'", country);
    }

    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "YEAR\t{}\tSOURCE\tTREND", field.column_name().to_uppercase())?;
    let mut previous: Option<f64> = None;
    for view in &timeline {
        let value = view.record.get(field);
        let arrow = previous.map_or("", |prev| Trend::between(prev, value).arrow());
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            view.record.year,
            fmt_value(value),
            view.provenance.as_str(),
            arrow
        )?;
        previous = Some(value);
    }
    writer.flush()?;
    Ok(())
}
