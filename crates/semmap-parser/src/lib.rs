//! # Semmap Parser
//!
//! Loads SVG text into a [`semmap_core::document::Document`] and parses the
//! attribute values the semantic mapper depends on.
//!
//! ## Usage
//!
//! ```
//! # use semmap_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r##"<svg xmlns="http://www.w3.org/2000/svg">
//!         <g stroke-linecap="round" transform="translate(500 300)">
//!             <path fill="#b2f2bb" d="M0 0"/>
//!         </g>
//!     </svg>"##;
//!
//!     let document = parse(source)?;
//!     assert_eq!(document.root().local_name(), "svg");
//!     Ok(())
//! }
//! ```

pub mod error;
mod reader;
mod span;
pub mod transform;

pub use reader::MAX_NESTING_DEPTH;
pub use span::Span;

use semmap_core::document::Document;

use error::ParseError;

/// Parse SVG source text into an owned document tree.
///
/// Failures carry one or more diagnostics with byte spans into `source`.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    reader::read_document(source)
}
