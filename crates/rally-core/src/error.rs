//! Error types for the trip coordination library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all coordinator operations.
#[derive(Error, Debug)]
pub enum CoordinatorError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// No participants have submitted yet
    #[error("No participant responses recorded yet")]
    NoRecords,
    /// Every participant responded but no shared date survived
    #[error("No common feasible dates across all participants")]
    NoCommonDates,
    /// No participant selected any destination
    #[error("No destination selections recorded")]
    NoSelections,
    /// The allocator was invoked with nothing to allocate
    #[error("Insufficient data for allocation: {reason}")]
    InsufficientData { reason: String },
    /// The suggestion generator failed or returned nothing usable
    #[error("Suggestion generator error: {message}")]
    Generator { message: String },
}

impl CoordinatorError {
    /// Creates a new database error with additional context.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an allocation precondition error.
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            reason: reason.into(),
        }
    }

    /// Creates a generator boundary error.
    pub fn generator(message: impl Into<String>) -> Self {
        Self::Generator {
            message: message.into(),
        }
    }
}

/// Extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CoordinatorError::database(message, e))
    }
}

/// Result type alias for coordinator operations
pub type Result<T> = std::result::Result<T, CoordinatorError>;
