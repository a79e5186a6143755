// src/error.rs

use thiserror::Error;

/// Fatal error types for rpminv
///
/// Field-level coercion problems are not errors at this level; they travel
/// as diagnostics on the extraction result. Anything here aborts the run.
#[derive(Error, Debug)]
pub enum Error {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Package database not found
    #[error("Package database not found at path: {0}")]
    DatabaseNotFound(String),

    /// File exists but does not look like a package database
    #[error("Not a recognized package database: {0}")]
    UnrecognizedDatabase(String),

    /// RPM package file could not be read or decoded
    #[error("Failed to read package file: {0}")]
    PackageRead(String),

    /// Canonical schema misconfiguration
    #[error("Invalid canonical schema: {0}")]
    Schema(String),
}

/// Result type alias using rpminv's Error type
pub type Result<T> = std::result::Result<T, Error>;
