//! Table rendering utilities for CLI outputs.

use crate::utils::colors::RESET;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row and widen the columns so every cell fits.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    /// Render with an optional ANSI style per cell: `style(row, col, text)`.
    /// Padding is computed on the visible text, so styles never break alignment.
    pub fn render_styled<F>(&self, style: F) -> String
    where
        F: Fn(usize, usize, &str) -> Option<&'static str>,
    {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.truncate(out.trim_end().len());
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for (r, row) in self.rows.iter().enumerate() {
            let mut line = String::new();
            for (c, col) in self.columns.iter().enumerate() {
                let cell = row.get(c).map(String::as_str).unwrap_or("");
                let padded = pad(cell, col.width);
                match style(r, c, cell) {
                    Some(color) => line.push_str(&format!("{color}{padded}{RESET}")),
                    None => line.push_str(&padded),
                }
                line.push(' ');
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(visible)))
}
