//! Error types for semantic map operations.
//!
//! This module provides the main error type [`SemmapError`] which wraps
//! the error conditions that can occur while loading, configuring and
//! writing a semantic map.

use std::io;

use thiserror::Error;

use semmap_parser::error::ParseError;

/// The main error type for semmap operations.
///
/// The `Parse` variant keeps the source text next to the diagnostics so that
/// callers can render them with source snippets.
#[derive(Debug, Error)]
pub enum SemmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for SemmapError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl SemmapError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
