//! Rebuilding the document around the assembled groups.
//!
//! The output is a fresh tree. Every extracted shape and label is left out of
//! its original place, whether it was matched or not, and the new groups are
//! appended to the root: legend first, then interactive content.

use std::collections::{HashMap, HashSet};

use log::debug;

use semmap_core::{
    document::{Document, Element, ElementId},
    semantic::MapElements,
};

use crate::{
    assembly::to_svg_group,
    extract::{extract_labels, extract_shapes},
};

/// Finds the solid white rectangle the drawing tool puts behind everything.
///
/// Only direct children of the root qualify; rects inside patterns, markers
/// or groups are content.
fn background_rect(doc: &Document) -> Option<ElementId> {
    let mut next = 1;
    for element in doc.root().child_elements() {
        if element.is("rect")
            && element.attribute("fill") == Some("#ffffff")
            && element.attribute("x") == Some("0")
            && element.attribute("y") == Some("0")
        {
            return Some(ElementId::new(next));
        }
        next += element.element_count();
    }
    None
}

/// Ids of every element that leaves its original position.
fn consumed_elements(doc: &Document) -> HashSet<ElementId> {
    let shapes = extract_shapes(doc);
    let labels = extract_labels(doc);

    shapes
        .iter()
        .map(|shape| shape.element())
        .chain(labels.iter().map(|label| label.element()))
        .chain(background_rect(doc))
        .collect()
}

/// Produces the restructured document.
///
/// Elements moved into a new group are copied without any consumed
/// descendants, so nothing appears twice in the output.
pub fn restructure(doc: &Document, elements: &MapElements) -> Document {
    let skip = consumed_elements(doc);
    let index: HashMap<ElementId, &Element> = doc.descendants().collect();
    let resolve = |id: ElementId| index.get(&id).map(|element| element.pruned(id, &skip));

    let mut output = doc.pruned(&skip);
    let root = output.root_mut();
    for node in elements.legend.iter().chain(&elements.interactive) {
        root.push_child(to_svg_group(node, &resolve));
    }

    debug!(
        removed = skip.len(),
        legend = elements.legend_count(),
        interactive = elements.interactive_count();
        "Restructured document"
    );
    output
}
