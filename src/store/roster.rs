//! Persistent roster: one student name per line, append-only.

use crate::errors::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all names in file order.
    ///
    /// A missing file is not an error: it simply means an empty roster.
    /// Blank lines are skipped; `\r\n` terminators are accepted.
    pub fn load(&self) -> AppResult<Vec<String>> {
        let file = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AppError::RosterLoad(e.to_string())),
        };

        let mut names = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| AppError::RosterLoad(e.to_string()))?;
            let name = line.strip_suffix('\r').unwrap_or(&line);
            if !name.trim().is_empty() {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }

    /// Append one name, creating the file if needed. Existing lines are never rewritten.
    pub fn append(&self, name: &str) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AppError::RosterSave(e.to_string()))?;

        writeln!(file, "{name}").map_err(|e| AppError::RosterSave(e.to_string()))?;
        Ok(())
    }

    /// Create an empty roster file if it does not exist yet.
    pub fn touch(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::File::create(&self.path)?;
        Ok(true)
    }
}
