//! Error types for hyperpage
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for hyperpage
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Argument Errors
    // ============================================================================
    #[error("Invalid argument '{name}': expected a positive integer, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("Page size {requested} exceeds the maximum of {max}")]
    PageSizeTooLarge { requested: usize, max: usize },

    // ============================================================================
    // Source Errors
    // ============================================================================
    #[error("Dataset source '{source_name}' unavailable: {message}")]
    SourceUnavailable {
        source_name: String,
        message: String,
    },

    #[error("CSV parsing error at line {line}: {message}")]
    CsvParse { line: usize, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {message}")]
    Server { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(name: &'static str, value: i64) -> Self {
        Self::InvalidArgument { name, value }
    }

    /// Create a source unavailable error
    pub fn source_unavailable(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a CSV parse error
    pub fn csv_parse(line: usize, message: impl Into<String>) -> Self {
        Self::CsvParse {
            line,
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. } | Error::PageSizeTooLarge { .. }
        )
    }
}

/// Result type alias for hyperpage
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("page", 0);
        assert_eq!(
            err.to_string(),
            "Invalid argument 'page': expected a positive integer, got 0"
        );

        let err = Error::source_unavailable("names.csv", "No such file");
        assert_eq!(
            err.to_string(),
            "Dataset source 'names.csv' unavailable: No such file"
        );

        let err = Error::csv_parse(3, "unterminated quote");
        assert_eq!(
            err.to_string(),
            "CSV parsing error at line 3: unterminated quote"
        );
    }

    #[test]
    fn test_is_client_error() {
        assert!(Error::invalid_argument("page_size", -1).is_client_error());
        assert!(Error::PageSizeTooLarge {
            requested: 500,
            max: 100
        }
        .is_client_error());

        assert!(!Error::source_unavailable("x", "y").is_client_error());
        assert!(!Error::config("bad").is_client_error());
        assert!(!Error::server("bind").is_client_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
