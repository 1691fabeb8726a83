//! Unified error types for bidmaster.
//!
//! The analysis engine itself is infallible by design (bad data degrades to
//! zero scores or orphan groups); these types cover the fallible edges of the
//! crate — dataset loading, report generation, and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bidmaster operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BidError {
    /// Errors while loading an item catalog or quotation list
    #[error("Failed to load dataset: {context}")]
    Dataset {
        context: String,
        #[source]
        source: DatasetErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific dataset loading error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DatasetErrorKind {
    #[error("Unknown dataset format - expected a .json or .csv file")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid CSV record: {0}")]
    InvalidCsv(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("CSV encoding failed: {0}")]
    CsvError(String),

    #[error("Output format not supported for this view: {0}")]
    UnsupportedFormat(String),
}

/// Convenient Result type for bidmaster operations
pub type Result<T> = std::result::Result<T, BidError>;

impl BidError {
    /// Create a dataset error with context
    pub fn dataset(context: impl Into<String>, source: DatasetErrorKind) -> Self {
        Self::Dataset {
            context: context.into(),
            source,
        }
    }

    /// Create a dataset error for an unrecognized file format
    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::dataset(
            format!("at {}", path.into()),
            DatasetErrorKind::UnknownFormat,
        )
    }

    /// Create a dataset error for a missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::dataset(
            "missing required field",
            DatasetErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for BidError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for BidError {
    fn from(err: serde_json::Error) -> Self {
        Self::dataset(
            "JSON deserialization",
            DatasetErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<csv::Error> for BidError {
    fn from(err: csv::Error) -> Self {
        Self::dataset(
            "CSV deserialization",
            DatasetErrorKind::InvalidCsv(err.to_string()),
        )
    }
}

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, creating
/// a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (only evaluated on the error path).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<BidError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: BidError, new_ctx: &str) -> BidError {
    match err {
        BidError::Dataset {
            context: existing,
            source,
        } => BidError::Dataset {
            context: chain_context(new_ctx, &existing),
            source,
        },
        BidError::Report {
            context: existing,
            source,
        } => BidError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        BidError::Io {
            path,
            message,
            source,
        } => BidError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        BidError::Config(msg) => BidError::Config(chain_context(new_ctx, &msg)),
        BidError::Validation(msg) => BidError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BidError::unknown_format("data.txt");
        let display = err.to_string();
        assert!(
            display.contains("dataset") || display.contains("data.txt"),
            "Error message should mention the dataset or path: {}",
            display
        );

        let err = BidError::missing_field("itemCode", "quotation");
        assert!(err.to_string().contains("missing required field"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = BidError::io("/data/quotes.json", io_err);
        assert!(err.to_string().contains("/data/quotes.json"));
    }

    #[test]
    fn test_context_chaining() {
        let initial: Result<()> = Err(BidError::dataset(
            "inner context",
            DatasetErrorKind::UnknownFormat,
        ));
        let wrapped = initial.context("outer context");

        match wrapped {
            Err(BidError::Dataset { context, .. }) => {
                assert!(context.contains("outer context"), "got: {}", context);
                assert!(context.contains("inner context"), "got: {}", context);
            }
            _ => panic!("Expected Dataset error"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(BidError::validation("boom"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
