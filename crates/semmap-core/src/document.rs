//! Owned element tree for SVG documents.
//!
//! The tree keeps exactly what the rest of the pipeline needs to read and
//! faithfully write back a drawing: qualified element names, attributes in
//! source order, text, CDATA and comments.
//!
//! # Element identity
//!
//! Elements are addressed by [`ElementId`], the pre-order index of the element
//! within its [`Document`] (the root is `0`). Ids are stable for as long as the
//! document is not changed, which lets later stages refer to source
//! primitives without holding borrows into the tree. Ids are only meaningful
//! for the document they were computed from.
//!
//! # Example
//!
//! ```
//! # use semmap_core::document::{Document, Element, ElementId, Node};
//! let root = Element::new("svg")
//!     .with_child(Element::new("g").with_attribute("id", "first"))
//!     .with_child(Element::new("g").with_child(Node::text("hello")));
//! let document = Document::new(root);
//!
//! let ids: Vec<_> = document.descendants().map(|(id, _)| id).collect();
//! assert_eq!(ids, vec![ElementId::new(0), ElementId::new(1), ElementId::new(2)]);
//!
//! let (_, first) = document.descendants().nth(1).unwrap();
//! assert_eq!(first.attribute("id"), Some("first"));
//! ```

use std::collections::HashSet;

use indexmap::IndexMap;
use log::trace;

/// Pre-order position of an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// Creates an id from a raw pre-order index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw pre-order index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single node in the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Character data, stored unescaped.
    Text(String),
    /// A `<![CDATA[...]]>` section, stored verbatim.
    CData(String),
    /// A comment, stored verbatim without the delimiters.
    Comment(String),
}

impl Node {
    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with its attributes and children.
///
/// The name is kept as written in the source, including any namespace
/// prefix. Use [`Element::local_name`] to compare element kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Returns the element with the attribute set.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Returns the element with the child appended.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push_child(child);
        self
    }

    /// Sets an attribute value.
    ///
    /// Replacing an existing attribute keeps its original position.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Appends a child node.
    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Returns the qualified name as written in the source (e.g. `svg:g`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Returns the namespace prefix of the name, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// Checks whether the element has the given local name.
    pub fn is(&self, local_name: &str) -> bool {
        self.local_name() == local_name
    }

    /// Returns the value of an attribute, looked up by its exact name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Checks if an attribute is present, regardless of its value.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Iterates over attributes in source order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns all child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterates over the immediate child elements.
    pub fn child_elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Returns the character data that precedes the first child element.
    ///
    /// For `<text>Hello <tspan>World</tspan></text>` this is `"Hello "`.
    pub fn leading_text(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                Node::Text(content) | Node::CData(content) => text.push_str(content),
                Node::Comment(_) => {}
                Node::Element(_) => break,
            }
        }
        text
    }

    /// Counts this element and all of its descendant elements.
    pub fn element_count(&self) -> usize {
        let mut stack = vec![self];
        let mut count = 0;
        while let Some(element) = stack.pop() {
            count += 1;
            stack.extend(element.child_elements());
        }
        count
    }

    /// Returns a copy of this element without the descendants listed in `skip`.
    ///
    /// `id` must be the id of `self` in the document the ids in `skip` were
    /// taken from. The element itself is always kept; a skipped descendant is
    /// dropped together with its whole subtree.
    pub fn pruned(&self, id: ElementId, skip: &HashSet<ElementId>) -> Element {
        let mut next = id.index() + 1;
        self.pruned_from(&mut next, skip)
    }

    fn pruned_from(&self, next: &mut usize, skip: &HashSet<ElementId>) -> Element {
        let mut pruned = Element {
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            children: Vec::with_capacity(self.children.len()),
        };

        for child in &self.children {
            match child {
                Node::Element(element) => {
                    let child_id = ElementId(*next);
                    if skip.contains(&child_id) {
                        *next += element.element_count();
                    } else {
                        *next += 1;
                        pruned
                            .children
                            .push(Node::Element(element.pruned_from(next, skip)));
                    }
                }
                other => pruned.children.push(other.clone()),
            }
        }

        pruned
    }
}

/// A parsed document: an optional DOCTYPE and the root element.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    doctype: Option<String>,
    root: Element,
}

impl Document {
    /// Creates a document from its root element.
    pub fn new(root: Element) -> Self {
        Self {
            doctype: None,
            root,
        }
    }

    /// Returns the document with the given DOCTYPE body (without `<!DOCTYPE` and `>`).
    pub fn with_doctype(mut self, doctype: impl Into<String>) -> Self {
        self.doctype = Some(doctype.into());
        self
    }

    /// Returns the DOCTYPE body, if the source had one.
    pub fn doctype(&self) -> Option<&str> {
        self.doctype.as_deref()
    }

    /// Returns the root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Returns a mutable reference to the root element.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Iterates over every element, root included, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![&self.root],
            next: 0,
        }
    }

    /// Returns a copy of the document without the elements listed in `skip`.
    ///
    /// The root element is always kept.
    pub fn pruned(&self, skip: &HashSet<ElementId>) -> Document {
        trace!(skipped = skip.len(); "Pruning document");
        Document {
            doctype: self.doctype.clone(),
            root: self.root.pruned(ElementId(0), skip),
        }
    }
}

/// Pre-order iterator over the elements of a [`Document`].
///
/// Created by [`Document::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
    next: usize,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (ElementId, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.child_elements().rev());

        let id = ElementId(self.next);
        self.next += 1;
        Some((id, element))
    }
}

/// Strips the namespace prefix from a qualified name.
pub fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        // svg(0) -> g(1) -> [path(2), text(3)], g(4) -> rect(5)
        let root = Element::new("svg")
            .with_attribute("xmlns", "http://www.w3.org/2000/svg")
            .with_child(
                Element::new("g")
                    .with_attribute("id", "shape")
                    .with_child(Element::new("path").with_attribute("fill", "#b2f2bb"))
                    .with_child(Element::new("text").with_child(Node::text("Label"))),
            )
            .with_child(Node::text("\n"))
            .with_child(Element::new("g").with_child(Element::new("rect")));
        Document::new(root)
    }

    #[test]
    fn test_descendants_are_in_document_order() {
        let document = sample();
        let names: Vec<_> = document
            .descendants()
            .map(|(id, element)| (id.index(), element.name().to_string()))
            .collect();

        assert_eq!(
            names,
            vec![
                (0, "svg".to_string()),
                (1, "g".to_string()),
                (2, "path".to_string()),
                (3, "text".to_string()),
                (4, "g".to_string()),
                (5, "rect".to_string()),
            ]
        );
    }

    #[test]
    fn test_descendants_stop_after_last_element() {
        let document = sample();
        let (id, shape) = document.descendants().nth(1).unwrap();
        assert_eq!(id, ElementId::new(1));
        assert_eq!(shape.attribute("id"), Some("shape"));
        assert!(document.descendants().nth(6).is_none());
    }

    #[test]
    fn test_local_name_strips_prefix() {
        let element = Element::new("svg:g");
        assert_eq!(element.local_name(), "g");
        assert_eq!(element.prefix(), Some("svg"));
        assert!(element.is("g"));

        let plain = Element::new("g");
        assert_eq!(plain.local_name(), "g");
        assert_eq!(plain.prefix(), None);
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let mut element = Element::new("g")
            .with_attribute("transform", "translate(1 2)")
            .with_attribute("stroke-linecap", "round");
        element.set_attribute("transform", "translate(3 4)");
        element.set_attribute("class", "node");

        let attributes: Vec<_> = element.attributes().collect();
        assert_eq!(
            attributes,
            vec![
                ("transform", "translate(3 4)"),
                ("stroke-linecap", "round"),
                ("class", "node"),
            ]
        );
        assert!(element.has_attribute("stroke-linecap"));
        assert!(!element.has_attribute("fill"));
    }

    #[test]
    fn test_leading_text_stops_at_first_element() {
        let element = Element::new("text")
            .with_child(Node::text("Hello "))
            .with_child(Node::Comment("note".to_string()))
            .with_child(Node::CData("there".to_string()))
            .with_child(Element::new("tspan").with_child(Node::text("World")))
            .with_child(Node::text(" tail"));

        assert_eq!(element.leading_text(), "Hello there");
    }

    #[test]
    fn test_element_count() {
        let document = sample();
        assert_eq!(document.root().element_count(), 6);
    }

    #[test]
    fn test_document_pruned_skips_subtrees() {
        let document = sample();
        let skip = HashSet::from([ElementId::new(1)]);

        let pruned = document.pruned(&skip);
        let names: Vec<_> = pruned
            .descendants()
            .map(|(_, element)| element.name().to_string())
            .collect();

        assert_eq!(names, vec!["svg", "g", "rect"]);
        // Non-element children survive.
        assert_eq!(pruned.root().children().len(), 2);
    }

    #[test]
    fn test_element_pruned_uses_source_ids() {
        let document = sample();
        let skip = HashSet::from([ElementId::new(3), ElementId::new(5)]);

        let (_, shape) = document.descendants().nth(1).unwrap();
        let pruned = shape.pruned(ElementId::new(1), &skip);

        let names: Vec<_> = pruned.child_elements().map(Element::name).collect();
        assert_eq!(names, vec!["path"]);
    }

    #[test]
    fn test_pruned_with_empty_skip_is_identical() {
        let document = sample();
        assert_eq!(document.pruned(&HashSet::new()), document);
    }
}
