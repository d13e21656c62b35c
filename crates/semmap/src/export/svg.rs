//! SVG serialization with quick-xml.

use std::io::Write;

use log::debug;
use quick_xml::{
    Writer,
    escape::partial_escape,
    events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use semmap_core::document::{Document, Element, Node};

use super::{Error, Exporter};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Writes documents as SVG markup into any [`Write`] sink.
///
/// Output is not re-indented; whitespace text from the source is written
/// back as it was.
pub struct SvgExporter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> SvgExporter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new(inner),
        }
    }

    /// Consumes the exporter and returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_event(&mut self, event: Event<'_>) -> Result<(), Error> {
        self.writer
            .write_event(event)
            .map_err(|err| Error::Render(format!("Write error: {err}")))
    }

    fn write_element(&mut self, element: &Element, declare_namespace: bool) -> Result<(), Error> {
        let mut start = BytesStart::new(element.name());
        if declare_namespace {
            start.push_attribute(("xmlns", SVG_NAMESPACE));
        }
        for attribute in element.attributes() {
            start.push_attribute(attribute);
        }

        if element.children().is_empty() {
            return self.write_event(Event::Empty(start));
        }

        self.write_event(Event::Start(start))?;
        for child in element.children() {
            self.write_node(child)?;
        }
        self.write_event(Event::End(BytesEnd::new(element.name())))
    }

    fn write_node(&mut self, node: &Node) -> Result<(), Error> {
        match node {
            Node::Element(element) => self.write_element(element, false),
            Node::Text(text) => {
                self.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
            }
            Node::CData(content) => self.write_event(Event::CData(BytesCData::new(content))),
            Node::Comment(content) => {
                self.write_event(Event::Comment(BytesText::from_escaped(content.as_str())))
            }
        }
    }
}

/// An unprefixed `svg` root needs the default namespace to render in browsers.
fn needs_namespace(root: &Element) -> bool {
    root.prefix().is_none() && root.local_name() == "svg" && !root.has_attribute("xmlns")
}

impl<W: Write> Exporter for SvgExporter<W> {
    fn export_document(&mut self, document: &Document) -> Result<(), Error> {
        self.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.write_event(Event::Text(BytesText::from_escaped("\n")))?;

        if let Some(doctype) = document.doctype() {
            self.write_event(Event::DocType(BytesText::from_escaped(doctype)))?;
            self.write_event(Event::Text(BytesText::from_escaped("\n")))?;
        }

        let root = document.root();
        self.write_element(root, needs_namespace(root))?;

        debug!(root = root.name(); "SVG document written");
        Ok(())
    }
}
