use std::io::{self, Write};

use anyhow::Result;
use ecast_core::Field;
use ecast_ts::Strategy;
use tabwriter::TabWriter;

pub fn handle() -> Result<()> {
    let mut writer = TabWriter::new(io::stdout());
    writeln!(writer, "FIELD\tCOLUMN\tMODEL")?;
    for field in Field::ALL {
        writeln!(
            writer,
            "{}\t{}\t{}",
            field.as_str(),
            field.column_name(),
            Strategy::for_field(field).name()
        )?;
    }
    writer.flush()?;
    Ok(())
}
