//! Error codes for the loader diagnostics.
//!
//! All loader codes live in the `E1xx` range.

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed markup.
    ///
    /// The reader could not make sense of a tag, entity or comment.
    E100,

    /// Unclosed element.
    ///
    /// The input ended while one or more elements were still open.
    E101,

    /// No root element.
    ///
    /// The input holds no element at all.
    E102,

    /// Content after the root element.
    ///
    /// Another element or non-whitespace text follows the root element.
    E103,

    /// Invalid attribute.
    ///
    /// An attribute is unquoted, duplicated, or its value cannot be unescaped.
    E104,

    /// Nesting too deep.
    ///
    /// An element sits deeper than [`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH).
    E105,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "malformed markup",
            ErrorCode::E101 => "unclosed element",
            ErrorCode::E102 => "no root element",
            ErrorCode::E103 => "content after root element",
            ErrorCode::E104 => "invalid attribute",
            ErrorCode::E105 => "nesting too deep",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
