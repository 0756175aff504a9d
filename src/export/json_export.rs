use crate::errors::AppResult;
use crate::export::model::ReportRow;
use std::io::Write;

/// Write the rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut out: W, rows: &[ReportRow]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
