use crate::errors::AppResult;
use crate::models::AttendanceRow;
use std::io::Write;

/// Pretty-printed JSON array of rows; empty date/status are written as `null`.
pub fn write_json<W: Write>(mut out: W, rows: &[AttendanceRow]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
