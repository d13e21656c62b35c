//! Export functionality for semantic maps.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! serializing a restructured document. It is the final stage of the
//! pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! SVG text
//!     ↓ parse
//! Document
//!     ↓ identify (extract, legend, matching)
//! MapElements
//!     ↓ restructure (assembly, rebuild)
//! Document
//!     ↓ export (this module)
//! SVG text
//! ```
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`SemmapError::Export`](crate::SemmapError::Export) at the crate boundary.

/// SVG export backend.
pub mod svg;

use semmap_core::document::Document;

/// Abstraction for document export backends.
pub trait Exporter {
    /// Writes the whole document to the backend's output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the document cannot be serialized, or
    /// [`Error::Io`] if writing the output fails.
    fn export_document(&mut self, document: &Document) -> Result<(), Error>;
}

/// Serializes a document to an SVG string.
///
/// # Examples
///
/// ```
/// # use semmap::export::write_svg;
/// # use semmap_core::document::{Document, Element};
/// let document = Document::new(Element::new("svg"));
/// let svg = write_svg(&document).unwrap();
/// assert_eq!(
///     svg,
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\"/>"
/// );
/// ```
pub fn write_svg(document: &Document) -> Result<String, Error> {
    let mut exporter = svg::SvgExporter::new(Vec::new());
    exporter.export_document(document)?;
    String::from_utf8(exporter.into_inner()).map_err(|err| Error::Render(err.to_string()))
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A serialization failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
