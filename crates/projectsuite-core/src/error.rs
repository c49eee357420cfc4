//! Error types for Project Suite

use thiserror::Error;

use crate::domain::projects::ProjectId;

/// Result type alias using Project Suite's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Project Suite error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Entity errors (E001-E099)
    #[error("Project '{0}' not found. Run `projectsuite projects list` to see all projects.")]
    ProjectNotFound(ProjectId),

    // Validation errors (E100-E199)
    #[error("Validation error for '{field}': {message}")]
    Validation { field: String, message: String },

    // Export errors (E200-E299)
    #[error("Export document is invalid: {0}")]
    InvalidExport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Input errors (E800-E899)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Generic errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a validation error for a named input field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound(_) => "E001",
            Self::Validation { .. } => "E100",
            Self::InvalidExport(_) => "E200",
            Self::Json(_) => "E201",
            Self::InvalidInput(_) => "E800",
            Self::Io(_) => "E9999",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ProjectNotFound(_) => Some("projectsuite projects list".to_string()),
            Self::Validation { field, .. } => Some(format!("projectsuite new --help ({})", field)),
            Self::InvalidExport(_) => Some("projectsuite export --output <path>".to_string()),
            _ => None,
        }
    }

    /// Whether the caller can keep going after this error
    ///
    /// Validation and lookup failures leave the collection untouched.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ProjectNotFound(_) | Self::Validation { .. } | Self::InvalidInput(_)
        )
    }
}
