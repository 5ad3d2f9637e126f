//! Row selection expressions.
//!
//! Supported forms (rows are 1-based, as printed by `list`):
//! - `all`      → every row
//! - `none`     → empty selection
//! - `3`        → a single row
//! - `2-5`      → inclusive range
//! - `1,3,6-8`  → any comma separated mix of the above

use crate::core::table::AttendanceTable;
use crate::errors::{AppError, AppResult};

/// Parse a selection expression into sorted, de-duplicated 0-based indices.
pub fn parse_selection(expr: &str, row_count: usize) -> AppResult<Vec<usize>> {
    let expr = expr.trim();

    if expr.eq_ignore_ascii_case("all") {
        return Ok((0..row_count).collect());
    }
    if expr.is_empty() || expr.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();

    for part in expr.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((s, e)) => (parse_row(s, expr)?, parse_row(e, expr)?),
            None => {
                let n = parse_row(part, expr)?;
                (n, n)
            }
        };

        if start > end {
            return Err(AppError::InvalidSelection(expr.to_string()));
        }

        for n in start..=end {
            if n > row_count {
                return Err(AppError::InvalidRow(n));
            }
            out.push(n - 1);
        }
    }

    out.sort_unstable();
    out.dedup();
    Ok(out)
}

fn parse_row(s: &str, expr: &str) -> AppResult<usize> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::InvalidSelection(expr.to_string())),
    }
}

/// Resolve student names to row indices.
pub fn select_by_names(table: &AttendanceTable, names: &[String]) -> AppResult<Vec<usize>> {
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let idx = table
            .position(name.trim())
            .ok_or_else(|| AppError::UnknownStudent(name.clone()))?;
        out.push(idx);
    }

    out.sort_unstable();
    out.dedup();
    Ok(out)
}
