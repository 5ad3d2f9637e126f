// src/export/logic.rs

use crate::core::table::AttendanceTable;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the whole table to `path`, replacing any previous content.
    ///
    /// - `format`: csv (reference layout) or json
    /// - `trailing_comma`: csv only, see [`write_csv`]
    /// - `force`: when false and the file exists, the user is asked first
    pub fn export(
        table: &AttendanceTable,
        path: &Path,
        format: ExportFormat,
        trailing_comma: bool,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        let file = File::create(path).map_err(|e| AppError::Export(e.to_string()))?;
        let out = BufWriter::new(file);

        match format {
            ExportFormat::Csv => write_csv(out, table.rows(), trailing_comma)?,
            ExportFormat::Json => write_json(out, table.rows())?,
        }

        notify_export_success("Attendance", path);
        Ok(())
    }
}
