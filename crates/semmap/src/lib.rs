//! Semmap - turns a drawn diagram SVG into a semantic map.
//!
//! Diagramming tools export loose primitives: filled shape groups and text
//! groups with no link between them. Semmap pairs every shape with the name
//! and number labels drawn next to it, separates the legend, and rewrites the
//! document so each node becomes one annotated group a viewer can script
//! against.

pub mod config;
pub mod export;

mod assembly;
mod error;
mod extract;
mod legend;
mod matching;
mod rebuild;

pub use semmap_core::{category, document, geometry, semantic};

pub use assembly::{INTERACTIVE_CLASS, NON_INTERACTIVE_CLASS, to_svg_group};
pub use error::SemmapError;
pub use extract::{extract_labels, extract_shapes};
pub use legend::{LegendPartition, partition_legend};
pub use matching::{MatchCaps, build_map_nodes};

use log::{debug, info, trace};

use config::AppConfig;
use document::Document;
use semantic::MapElements;

/// A restructured document together with the nodes it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticMap {
    document: Document,
    elements: MapElements,
}

impl SemanticMap {
    /// The rebuilt document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The legend and interactive nodes, in the order they were appended.
    pub fn elements(&self) -> &MapElements {
        &self.elements
    }

    pub fn interactive_count(&self) -> usize {
        self.elements.interactive_count()
    }

    pub fn legend_count(&self) -> usize {
        self.elements.legend_count()
    }
}

/// Builder for turning diagram SVGs into semantic maps.
///
/// # Examples
///
/// ```rust
/// use semmap::{MapBuilder, config::AppConfig};
///
/// let source = r##"<svg xmlns="http://www.w3.org/2000/svg">
///   <g stroke-linecap="round" transform="translate(500 300)"><path fill="#b2f2bb" d="M0 0"/></g>
///   <g transform="translate(457 288)"><text x="48.8" y="17.6">Context Management</text></g>
///   <g transform="translate(498 318)"><text>1</text></g>
/// </svg>"##;
///
/// let builder = MapBuilder::new(AppConfig::default());
/// let document = builder.parse(source).expect("Failed to parse");
///
/// let map = builder.build_semantic_map(&document);
/// assert_eq!(map.interactive_count(), 1);
/// assert_eq!(map.legend_count(), 0);
///
/// let svg = builder.render_svg(map.document()).expect("Failed to render");
/// assert!(svg.contains(r#"data-label="Context Management""#));
/// ```
#[derive(Default)]
pub struct MapBuilder {
    config: AppConfig,
}

impl MapBuilder {
    /// Create a new map builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse SVG text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`SemmapError::Parse`] with the diagnostics and the source
    /// text when the markup is not well formed.
    pub fn parse(&self, source: &str) -> Result<Document, SemmapError> {
        info!("Parsing SVG");

        let document = semmap_parser::parse(source)
            .map_err(|err| SemmapError::new_parse_error(err, source))?;

        debug!(elements = document.root().element_count(); "SVG parsed successfully");
        Ok(document)
    }

    /// Find the legend and interactive nodes of a document.
    ///
    /// The legend is separated first; legend shapes are then matched only
    /// against legend labels and regular shapes only against regular labels.
    pub fn identify(&self, document: &Document) -> MapElements {
        let matching = self.config.matching();
        let shapes = extract_shapes(document);
        let labels = extract_labels(document);

        let partition = partition_legend(shapes, labels, matching.legend_proximity());
        let caps = MatchCaps::from(matching);

        let elements = MapElements {
            legend: build_map_nodes(&partition.legend_shapes, &partition.legend_labels, caps),
            interactive: build_map_nodes(
                &partition.regular_shapes,
                &partition.regular_labels,
                caps,
            ),
        };

        info!(
            interactive = elements.interactive_count(),
            legend = elements.legend_count();
            "Identified map elements"
        );
        trace!(elements:?; "Map elements");
        elements
    }

    /// Build the output document for already identified elements.
    pub fn restructure(&self, document: &Document, elements: &MapElements) -> Document {
        rebuild::restructure(document, elements)
    }

    /// Identify and restructure in one step.
    pub fn build_semantic_map(&self, document: &Document) -> SemanticMap {
        let elements = self.identify(document);
        let document = self.restructure(document, &elements);
        SemanticMap { document, elements }
    }

    /// Serialize a document to SVG text.
    ///
    /// # Errors
    ///
    /// Returns [`SemmapError::Export`] if serialization fails.
    pub fn render_svg(&self, document: &Document) -> Result<String, SemmapError> {
        let svg = export::write_svg(document)?;
        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
