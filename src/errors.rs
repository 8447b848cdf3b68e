//! Unified application error type.
//! All modules (core, export, config, cli) return AppError to keep the error
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

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Editing errors
    // ---------------------------
    #[error("Invalid row: {0} (the ledger has {1} rows)")]
    InvalidRow(usize, usize),

    #[error("Invalid field name: {0}")]
    InvalidField(String),

    #[error("Invalid day value: {0}")]
    InvalidDay(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("Import error at line {line}: {msg}")]
    Import { line: u64, msg: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}

pub type AppResult<T> = Result<T, AppError>;
