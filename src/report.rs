//! CSV export of curve tables

use std::{fs::File, io::Write, path::Path};
use thiserror::Error;

use crate::curves::CurveTable;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `table` as CSV: the abscissa label and curve names as header, then
/// one row per abscissa value
pub fn write_csv<W: Write>(writer: W, table: &CurveTable) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(table.curves().len() + 1);
    header.push(table.x_label().to_string());
    header.extend(table.curves().iter().map(|c| c.name.clone()));
    wtr.write_record(&header)?;

    for (i, x) in table.x().iter().enumerate() {
        let mut row = Vec::with_capacity(header.len());
        row.push(x.to_string());
        row.extend(table.curves().iter().map(|c| c.values[i].to_string()));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write `table` to a CSV file at `path`, replacing any existing file
pub fn write_csv_file(path: impl AsRef<Path>, table: &CurveTable) -> Result<(), ReportError> {
    let file = File::create(path.as_ref())?;
    write_csv(file, table)?;
    tracing::debug!(path = %path.as_ref().display(), rows = table.len(), "wrote curve table");
    Ok(())
}
