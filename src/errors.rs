//! Unified application error type.
//! All modules (db, core, cli, export, server) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid month: {0} (expected YYYY-MM, YYYY-MM-DD or MM/YYYY)")]
    InvalidMonth(String),

    #[error("Invalid load: {0} (must be between 0 and 31)")]
    InvalidLoad(i64),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid color: {0} (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Person not found: {0}")]
    PersonNotFound(i64),

    #[error("Subject not found: {0}")]
    SubjectNotFound(i64),

    #[error("Team not found: {0}")]
    TeamNotFound(i64),

    #[error("Admin not found: {0}")]
    AdminNotFound(String),

    // ---------------------------
    // Access
    // ---------------------------
    #[error("Admin login required")]
    Unauthorized,

    #[error("Not an admin: {0}")]
    Forbidden(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Palette configuration error: {0}")]
    Palette(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by the caller's input rather than by the system.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidMonth(_)
                | AppError::InvalidLoad(_)
                | AppError::InvalidPeriod(_)
                | AppError::InvalidColor(_)
                | AppError::InvalidInput(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::PersonNotFound(_)
                | AppError::SubjectNotFound(_)
                | AppError::TeamNotFound(_)
                | AppError::AdminNotFound(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
