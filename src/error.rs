//! Unified error types for product-transparency.
//!
//! This module provides the error hierarchy for the library, with
//! context chains for debugging and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for product-transparency operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransparencyError {
    /// Errors while decoding product input
    #[error("Failed to parse product: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors while reading product input
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for product-transparency operations
pub type Result<T> = std::result::Result<T, TransparencyError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl TransparencyError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
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
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for TransparencyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for TransparencyError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Each call prepends to the error's existing context, building a chain
/// that traces the path through the code.
///
/// # Example
///
/// ```
/// use product_transparency::error::{ErrorContext, Result};
///
/// fn load(path: &str) -> Result<String> {
///     std::fs::read_to_string(path).with_context(|| format!("reading {path}"))
/// }
///
/// let err = load("/definitely/missing.json").unwrap_err();
/// assert!(err.to_string().contains("reading /definitely/missing.json"));
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<TransparencyError>> ErrorContext<T> for std::result::Result<T, E> {
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
fn add_context_to_error(err: TransparencyError, new_ctx: &str) -> TransparencyError {
    match err {
        TransparencyError::Parse {
            context: existing,
            source,
        } => TransparencyError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        TransparencyError::Io {
            path,
            message,
            source,
        } => TransparencyError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
    }
}

/// Chain two context strings together as "`new`: `existing`".
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
        let err = TransparencyError::parse("product input", ParseErrorKind::EmptyInput);
        assert_eq!(err.to_string(), "Failed to parse product: product input");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = TransparencyError::io("/path/to/product.json", io_err);

        assert!(err.to_string().contains("/path/to/product.json"));
    }

    #[test]
    fn test_io_context_chains_into_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let result: Result<()> = Err::<(), _>(io_err).context("reading product from stdin");
        match result {
            Err(TransparencyError::Io { path, message, .. }) => {
                assert!(path.is_none());
                assert_eq!(message, "reading product from stdin: stream closed");
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_context_chains_through_product_loading() {
        fn decode(input: &str) -> Result<serde_json::Value> {
            serde_json::from_str(input)
                .map_err(TransparencyError::from)
                .context("decoding product JSON")
        }

        fn load(path: &str, input: &str) -> Result<serde_json::Value> {
            decode(input).with_context(|| format!("loading {path}"))
        }

        match load("products/tee.json", "{\"name\": ") {
            Err(TransparencyError::Parse { context, source }) => {
                assert_eq!(
                    context,
                    "loading products/tee.json: decoding product JSON: JSON deserialization"
                );
                assert!(matches!(source, ParseErrorKind::InvalidJson(_)));
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_context_closure_skipped_on_success() {
        let mut rendered_name = false;
        let score: Result<u8> = Ok(30);
        let score = score.with_context(|| {
            rendered_name = true;
            "scoring Widget"
        });
        assert_eq!(score.unwrap(), 30);
        assert!(!rendered_name);
    }

    #[test]
    fn test_json_error_conversion() {
        let err: TransparencyError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            TransparencyError::Parse {
                source: ParseErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("outer", "middle: inner"), "outer: middle: inner");
    }
}
