//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for census-report operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A numeric part of an income label could not be read
    #[error("Parse error in label '{label}': {message}")]
    Parse { label: String, message: String },

    /// Export rows are not in ascending income order
    #[error("Ordering error at data row {}: {message}", .row + 1)]
    Ordering { row: usize, message: String },

    /// Export file does not match the expected layout
    #[error("Layout error in {}: {message}", .path.display())]
    Layout { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },

    /// CSV reader errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Wrap an io error with the path that produced it
    pub fn from_io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("{} ({})", source, path.display()),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Create a parse error for a label
    pub fn parse(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            label: label.into(),
            message: message.into(),
        }
    }

    pub fn ordering(row: usize, message: impl Into<String>) -> Self {
        Self::Ordering {
            row,
            message: message.into(),
        }
    }

    pub fn layout(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Layout {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The error underneath any context layers
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::WithContext { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
