//! Builds a [`Document`] from SVG text using quick-xml events.

use std::borrow::Cow;

use log::{debug, trace};
use quick_xml::{
    Reader,
    errors::{Error as XmlError, IllFormedError},
    events::{BytesStart, Event},
};
use semmap_core::document::{Document, Element, Node};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError, Result},
    span::Span,
};

/// Deepest element nesting the reader accepts, the root being depth 1.
///
/// Tree walks over a loaded document recurse once per level.
pub const MAX_NESTING_DEPTH: usize = 256;

/// An element whose end tag has not been seen yet.
struct OpenElement {
    element: Element,
    span: Span,
}

/// Assembles the element tree as events arrive.
#[derive(Default)]
struct TreeBuilder {
    open: Vec<OpenElement>,
    root: Option<(Element, Span)>,
    doctype: Option<String>,
}

impl TreeBuilder {
    fn open(&mut self, element: Element, span: Span) -> Result<()> {
        self.check_depth(span)?;
        if self.open.is_empty() {
            self.check_no_root(element.name(), span)?;
        }
        self.open.push(OpenElement { element, span });
        Ok(())
    }

    fn close(&mut self, span: Span) -> Result<()> {
        let OpenElement {
            element,
            span: open_span,
        } = self.open.pop().ok_or_else(|| {
            Diagnostic::error("closing tag without a matching opening tag")
                .with_code(ErrorCode::E100)
                .with_label(span, "unexpected closing tag")
        })?;
        self.attach(Node::Element(element), open_span.union(span))
    }

    fn attach(&mut self, node: Node, span: Span) -> Result<()> {
        if let Some(parent) = self.open.last_mut() {
            parent.element.push_child(node);
            return Ok(());
        }

        match node {
            Node::Element(element) => {
                self.check_no_root(element.name(), span)?;
                self.root = Some((element, span));
                Ok(())
            }
            Node::Text(text) if is_blank(&text) => Ok(()),
            Node::Text(_) if self.root.is_some() => Err(Diagnostic::error(
                "text after the root element",
            )
            .with_code(ErrorCode::E103)
            .with_label(span, "unexpected text")),
            Node::Text(_) => Err(Diagnostic::error("text before the root element")
                .with_code(ErrorCode::E100)
                .with_label(span, "unexpected text")
                .with_help("an SVG document starts with its `<svg>` element")),
            Node::CData(_) | Node::Comment(_) => {
                trace!(span:% = span; "Dropping top-level comment or CDATA");
                Ok(())
            }
        }
    }

    fn check_depth(&self, span: Span) -> Result<()> {
        if self.open.len() < MAX_NESTING_DEPTH {
            return Ok(());
        }
        let mut diagnostic = Diagnostic::error(format!(
            "elements are nested more than {MAX_NESTING_DEPTH} levels deep"
        ))
        .with_code(ErrorCode::E105)
        .with_label(span, "too deep");
        if let Some(root) = self.open.first() {
            diagnostic = diagnostic.with_secondary_label(root.span, "root opened here");
        }
        Err(diagnostic)
    }

    fn check_no_root(&self, name: &str, span: Span) -> Result<()> {
        match &self.root {
            Some((root, root_span)) => Err(Diagnostic::error(format!(
                "element `{name}` after the root element"
            ))
            .with_code(ErrorCode::E103)
            .with_label(span, "unexpected element")
            .with_secondary_label(*root_span, format!("root element `{}`", root.name()))
            .with_help("an SVG document has exactly one root element")),
            None => Ok(()),
        }
    }

    fn finish(self, eof: Span) -> std::result::Result<Document, ParseError> {
        if !self.open.is_empty() {
            let diagnostics = self
                .open
                .iter()
                .rev()
                .map(|open| {
                    let name = open.element.name();
                    Diagnostic::error(format!("element `{name}` is never closed"))
                        .with_code(ErrorCode::E101)
                        .with_label(eof, "input ends here")
                        .with_secondary_label(open.span, "opened here")
                        .with_help(format!("add the matching `</{name}>`"))
                })
                .collect();
            return Err(ParseError::new(diagnostics));
        }

        let Some((root, _)) = self.root else {
            return Err(Diagnostic::error("document has no root element")
                .with_code(ErrorCode::E102)
                .with_label(eof, "expected an `<svg>` element")
                .into());
        };

        let document = Document::new(root);
        Ok(match self.doctype {
            Some(doctype) => document.with_doctype(doctype),
            None => document,
        })
    }
}

fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

fn decode<'b>(reader: &Reader<&[u8]>, bytes: &'b [u8], span: Span) -> Result<Cow<'b, str>> {
    reader.decoder().decode(bytes).map_err(|err| {
        Diagnostic::error(format!("invalid text encoding: {err}"))
            .with_code(ErrorCode::E100)
            .with_label(span, "cannot be decoded")
    })
}

fn invalid_attribute(message: String, span: Span) -> Diagnostic {
    Diagnostic::error(message)
        .with_code(ErrorCode::E104)
        .with_label(span, "in this tag")
        .with_help("attribute values must be quoted and each name may appear once per element")
}

/// Converts a start or empty tag into an element with its attributes in order.
fn start_element(reader: &Reader<&[u8]>, tag: &BytesStart<'_>, span: Span) -> Result<Element> {
    let qname = tag.name();
    let name = decode(reader, qname.as_ref(), span)?;
    let mut element = Element::new(name.into_owned());

    for attribute in tag.attributes() {
        let attribute = attribute.map_err(|err| invalid_attribute(err.to_string(), span))?;
        let key = decode(reader, attribute.key.as_ref(), span)?.into_owned();
        let value = attribute.unescape_value().map_err(|err| {
            invalid_attribute(format!("invalid value for attribute `{key}`: {err}"), span)
        })?;
        element.set_attribute(key, value.into_owned());
    }

    Ok(element)
}

/// Maps a reader failure to a diagnostic at the position quick-xml reports.
fn markup_error(reader: &Reader<&[u8]>, err: XmlError) -> Diagnostic {
    let position = reader.error_position() as usize;
    let span = Span::new(position..reader.buffer_position() as usize);
    let code = match &err {
        XmlError::InvalidAttr(_) => ErrorCode::E104,
        XmlError::IllFormed(IllFormedError::MissingEndTag(_)) => ErrorCode::E101,
        _ => ErrorCode::E100,
    };

    Diagnostic::error(err.to_string())
        .with_code(code)
        .with_label(span, code.description())
}

/// Reads SVG source text into an owned document tree.
///
/// Elements, attributes, text, CDATA sections, comments inside the root and
/// the DOCTYPE are kept. The XML declaration and processing instructions are
/// dropped.
pub fn read_document(source: &str) -> std::result::Result<Document, ParseError> {
    let mut reader = Reader::from_str(source);
    let mut builder = TreeBuilder::default();

    loop {
        let start = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .map_err(|err| markup_error(&reader, err))?;
        let span = Span::new(start..reader.buffer_position() as usize);

        match event {
            Event::Start(tag) => {
                let element = start_element(&reader, &tag, span)?;
                builder.open(element, span)?;
            }
            Event::Empty(tag) => {
                builder.check_depth(span)?;
                let element = start_element(&reader, &tag, span)?;
                builder.attach(Node::Element(element), span)?;
            }
            Event::End(_) => builder.close(span)?,
            Event::Text(text) => {
                let content = text.unescape().map_err(|err| {
                    Diagnostic::error(format!("invalid character reference: {err}"))
                        .with_code(ErrorCode::E100)
                        .with_label(span, "in this text")
                })?;
                builder.attach(Node::Text(content.into_owned()), span)?;
            }
            Event::CData(data) => {
                let content = decode(&reader, &data, span)?.into_owned();
                builder.attach(Node::CData(content), span)?;
            }
            Event::Comment(comment) => {
                let content = decode(&reader, &comment, span)?.into_owned();
                builder.attach(Node::Comment(content), span)?;
            }
            Event::DocType(doctype) => {
                let content = decode(&reader, &doctype, span)?;
                builder.doctype = Some(content.trim().to_string());
            }
            Event::Decl(_) | Event::PI(_) => {
                trace!(span:% = span; "Skipping declaration or processing instruction");
            }
            Event::Eof => break,
        }
    }

    let document = builder.finish(Span::at(source.len()))?;
    debug!(
        root = document.root().name(),
        elements = document.root().element_count();
        "Loaded SVG document"
    );
    Ok(document)
}
