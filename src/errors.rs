//! Unified application error type.
//! All modules (store, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Error loading student names: {0}")]
    RosterLoad(String),

    #[error("Error saving student name: {0}")]
    RosterSave(String),

    // ---------------------------
    // Audit log
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Please enter a student name.")]
    EmptyName,

    #[error("Student name must fit on a single line.")]
    MultiLineName,

    #[error("Input is not valid UTF-8: line ignored.")]
    InvalidEncoding,

    #[error("Student already exists: {0}")]
    DuplicateStudent(String),

    #[error("Please select one or more students to mark attendance.")]
    NoSelection,

    #[error("Invalid row number: {0}")]
    InvalidRow(usize),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Unknown student: {0}")]
    UnknownStudent(String),

    #[error("Invalid attendance status: {0}")]
    InvalidStatus(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Error saving file: {0}")]
    Export(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(format!("JSON serialization error: {e}"))
    }
}

pub type AppResult<T> = Result<T, AppError>;
