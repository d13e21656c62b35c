//! Wrapping matched nodes into annotated SVG groups.
//!
//! Interactive groups carry the attributes a viewer script hooks into:
//!
//! ```text
//! <g class="interactive-node" data-label="Context Management" data-color="pattern" data-number="1">
//!   <g stroke-linecap="round" ...>...</g>      shape
//!   <g transform="..."><text>1</text></g>      number
//!   <g transform="..."><text>...</text></g>    name
//! </g>
//! ```
//!
//! Everything else, such as legend swatches and pit stops, is marked
//! `non-interactive-element` and only carries its name as `data-type`.

use log::trace;

use semmap_core::{
    document::{Element, ElementId},
    semantic::MapNode,
};

const DEFAULT_GROUP_NAME: &str = "g";

pub const INTERACTIVE_CLASS: &str = "interactive-node";
pub const NON_INTERACTIVE_CLASS: &str = "non-interactive-element";

fn set_interactive_attributes(group: &mut Element, node: &MapNode) {
    group.set_attribute("class", INTERACTIVE_CLASS);
    if let Some(name) = node.name() {
        group.set_attribute("data-label", name.content());
    }
    group.set_attribute("data-color", node.category().as_str());
    if let Some(number) = node.number_text() {
        group.set_attribute("data-number", number);
    }
}

fn set_non_interactive_attributes(group: &mut Element, node: &MapNode) {
    group.set_attribute("class", NON_INTERACTIVE_CLASS);
    if let Some(name) = node.name() {
        group.set_attribute("data-type", name.content());
    }
}

/// Builds the group element for one map node.
///
/// `resolve` supplies the element to place in the group for a source id. The
/// group takes the qualified name of the shape element so prefixed documents
/// stay consistent. Children are the shape, then the number label, then the
/// name label; ids that do not resolve are left out.
pub fn to_svg_group(node: &MapNode, resolve: impl Fn(ElementId) -> Option<Element>) -> Element {
    let shape = resolve(node.shape().element());
    let name = shape.as_ref().map_or(DEFAULT_GROUP_NAME, Element::name);
    let mut group = Element::new(name);

    if node.is_interactive() {
        set_interactive_attributes(&mut group, node);
    } else {
        set_non_interactive_attributes(&mut group, node);
    }

    let members = [node.number(), node.name()]
        .into_iter()
        .flatten()
        .map(|label| resolve(label.element()));

    for member in std::iter::once(shape).chain(members).flatten() {
        group.push_child(member);
    }

    trace!(
        interactive = node.is_interactive(),
        name = node.display_name().unwrap_or_default(),
        children = group.children().len();
        "Assembled group"
    );
    group
}
