use crate::errors::AppResult;
use crate::export::model::{ReportRow, get_headers};
use csv::WriterBuilder;
use std::io::Write;

/// Write the rows as CSV. The header line is written even when there are no rows.
pub fn write_csv<W: Write>(out: W, rows: &[ReportRow]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(get_headers())?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
