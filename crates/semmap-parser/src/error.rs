//! Error and diagnostic system for the SVG loader.
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single loading error with an optional error code, labeled source
//! locations, and help text. Diagnostics are wrapped in [`ParseError`] when
//! loading fails.
//!
//! # Example
//!
//! ```
//! # use semmap_parser::error::{Diagnostic, ErrorCode};
//! # use semmap_parser::Span;
//!
//! let diag = Diagnostic::error("element `g` is never closed")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::at(240), "input ends here")
//!     .with_secondary_label(Span::new(12..40), "opened here")
//!     .with_help("add the matching `</g>`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
