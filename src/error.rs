/// Error types for the flights tools
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for flight-store operations
#[derive(Error, Debug)]
pub enum FlightsError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (creating the database file's directory, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for flight-store operations
pub type Result<T> = std::result::Result<T, FlightsError>;
