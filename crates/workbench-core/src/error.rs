//! Error types for Workbench

use thiserror::Error;

/// Result type alias using Workbench's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Workbench error types
#[derive(Error, Debug)]
pub enum Error {
    // Entity errors (E001-E099)
    #[error("Project with ID={0} does not exist.")]
    ProjectNotFound(i64),

    // Database errors (E100-E199)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Row mapping failed: {0}")]
    Mapping(String),

    #[error("Storage integrity violation: {0}")]
    Integrity(String),

    // Input errors (E200-E299)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Config errors (E300-E399)
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound(_) => "E001",
            Self::Database(_) => "E100",
            Self::Mapping(_) => "E101",
            Self::Integrity(_) => "E102",
            Self::InvalidInput(_) => "E200",
            Self::Config(_) => "E300",
            Self::Io(_) => "E9999",
        }
    }

    /// Whether the error is a normal user-facing outcome rather than a fault
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ProjectNotFound(_) | Self::InvalidInput(_))
    }
}
