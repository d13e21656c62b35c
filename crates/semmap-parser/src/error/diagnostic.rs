//! The core diagnostic type.
//!
//! A [`Diagnostic`] represents a single loading error with an optional
//! error code, multiple labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{ErrorCode, Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// ```text
/// error[E100]: malformed markup
///    |
///  4 |   <g transform="translate(10 20)"<path/>
///    |                                  ^ unexpected `<` inside a tag
///    |
///    = help: check that every tag is closed with `>`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use semmap_parser::error::{Diagnostic, ErrorCode};
    /// # use semmap_parser::Span;
    ///
    /// let diag = Diagnostic::error("document has no root element")
    ///     .with_code(ErrorCode::E102)
    ///     .with_label(Span::at(0), "expected `<svg>`");
    /// assert_eq!(diag.to_string(), "error[E102]: document has no root element");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
