use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the roster file to `dest`, optionally replacing it with a `.zip`.
    /// Returns the path of the file actually written.
    pub fn backup(roster: &Path, dest: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        // 1️⃣ Check roster exists
        if !roster.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Roster not found: {}", roster.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_writable(&target, force)?;

        // 3️⃣ Copy or compress
        if compress {
            compress_into(roster, &target)?;
        } else {
            fs::copy(roster, &target)?;
        }

        success(format!("Backup created: {}", target.display()));
        Ok(target)
    }
}

/// Write `src` as the single entry of a deflated zip archive at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "students.txt".to_string());

    zip.start_file(entry, options).map_err(io::Error::other)?;

    let mut f = fs::File::open(src)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
