use crate::errors::AppResult;
use crate::models::AttendanceRow;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

/// Write the table as `name,date,status` lines: no header, no quoting.
///
/// With `trailing_comma`, a row that carries a status ends with an extra
/// comma after the status field (`B,2024-01-01,Present,`); unmarked rows end
/// after their empty status field (`A,,`).
pub fn write_csv<W: Write>(out: W, rows: &[AttendanceRow], trailing_comma: bool) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .from_writer(out);

    for row in rows {
        let date = row.date_str();
        let mut record = vec![row.name.as_str(), date.as_str(), row.status_str()];
        if trailing_comma && row.is_marked() {
            record.push("");
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Same as [`write_csv`], into a string.
pub fn render_csv(rows: &[AttendanceRow], trailing_comma: bool) -> AppResult<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows, trailing_comma)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
