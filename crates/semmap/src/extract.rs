//! Locating shapes and labels in a loaded document.
//!
//! Both extractors walk the whole tree in document order and refer back to
//! the source elements by [`ElementId`]. Elements are matched by local name,
//! so namespaced and unprefixed documents behave the same.

use log::{debug, trace};

use semmap_core::{
    document::{Document, Element, ElementId},
    geometry::Point,
    semantic::{Label, Shape},
};
use semmap_parser::transform::{parse_coordinate, parse_translate};

const GROUP: &str = "g";
const PATH: &str = "path";
const TEXT: &str = "text";

/// Marks a group drawn as a shape rather than a text or decoration group.
const SHAPE_MARKER: &str = "stroke-linecap";

/// Fill values that do not count as a visible color.
const BLANK_FILLS: [&str; 3] = ["none", "#ffffff", "white"];

fn translation(element: &Element) -> Option<Point> {
    element.attribute("transform").and_then(parse_translate)
}

/// Fill of the first immediate `path` child that has a visible color.
fn shape_fill(group: &Element) -> Option<&str> {
    group
        .child_elements()
        .filter(|child| child.is(PATH))
        .filter_map(|path| path.attribute("fill"))
        .find(|fill| !fill.is_empty() && !BLANK_FILLS.contains(fill))
}

/// Finds every positioned, filled shape group.
pub fn extract_shapes(doc: &Document) -> Vec<Shape> {
    let shapes: Vec<Shape> = doc
        .descendants()
        .filter(|(_, element)| element.is(GROUP) && element.has_attribute(SHAPE_MARKER))
        .filter_map(|(id, group)| {
            let Some(position) = translation(group) else {
                trace!(element = id.index(); "Shape group has no translation");
                return None;
            };
            let Some(fill) = shape_fill(group) else {
                trace!(element = id.index(); "Shape group has no visible fill");
                return None;
            };
            Some(Shape::new(id, position, fill))
        })
        .collect();

    debug!(count = shapes.len(); "Extracted shapes");
    shapes
}

/// Text of one `text` element.
///
/// Inline spans win over the element's own text. Blank spans are skipped.
fn line_content(text: &Element) -> String {
    let spans: Vec<String> = text
        .child_elements()
        .map(|span| span.leading_text().trim().to_string())
        .filter(|content| !content.is_empty())
        .collect();

    if spans.is_empty() {
        text.leading_text().trim().to_string()
    } else {
        spans.join(" ")
    }
}

fn line_offset(text: &Element) -> Point {
    let coordinate = |name: &str| {
        text.attribute(name)
            .and_then(parse_coordinate)
            .unwrap_or_default()
    };
    Point::new(coordinate("x"), coordinate("y"))
}

/// Builds a label from a group holding one or more `text` lines.
fn group_label(id: ElementId, group: &Element) -> Option<Label> {
    let origin = translation(group)?;

    let mut lines = group
        .child_elements()
        .filter(|child| child.is(TEXT))
        .map(|text| (line_content(text), text))
        .filter(|(content, _)| !content.is_empty());

    let (first, first_text) = lines.next()?;
    let position = origin.add_point(line_offset(first_text));

    let content = lines.fold(first, |mut content, (line, _)| {
        content.push(' ');
        content.push_str(&line);
        content
    });

    Some(Label::new(id, position, content))
}

/// Finds every positioned text group with non-empty content.
pub fn extract_labels(doc: &Document) -> Vec<Label> {
    let labels: Vec<Label> = doc
        .descendants()
        .filter(|(_, element)| {
            element.is(GROUP) && element.child_elements().any(|child| child.is(TEXT))
        })
        .filter_map(|(id, group)| group_label(id, group))
        .collect();

    debug!(count = labels.len(); "Extracted labels");
    labels
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn parse(source: &str) -> Document {
        semmap_parser::parse(source).unwrap()
    }

    #[test]
    fn test_extract_shape() {
        let doc = parse(
            r##"<svg><g stroke-linecap="round" transform="translate(500 300) rotate(0 26.7 26.2)"><path fill="#b2f2bb" d="M0 0"/></g></svg>"##,
        );
        let shapes = extract_shapes(&doc);

        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].element(), ElementId::new(1));
        assert_eq!(shapes[0].position(), Point::new(500.0, 300.0));
        assert_eq!(shapes[0].fill(), "#b2f2bb");
    }

    #[test]
    fn test_shape_requires_marker_translation_and_fill() {
        let doc = parse(
            r##"<svg>
                <g transform="translate(1 1)"><path fill="#b2f2bb"/></g>
                <g stroke-linecap="round"><path fill="#b2f2bb"/></g>
                <g stroke-linecap="round" transform="translate(2 2)"><path fill="none"/></g>
                <g stroke-linecap="round" transform="translate(3 3)"><rect fill="#b2f2bb"/></g>
            </svg>"##,
        );

        assert!(extract_shapes(&doc).is_empty());
    }

    #[test]
    fn test_shape_fill_skips_blank_paths() {
        let doc = parse(
            r##"<svg><g stroke-linecap="round" transform="translate(0 0)">
                <path fill=""/><path fill="white"/><path fill="#ffffff"/><path d="M0 0"/>
                <path fill="#ffc9c9"/><path fill="#a5d8ff"/>
            </g></svg>"##,
        );
        let shapes = extract_shapes(&doc);

        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].fill(), "#ffc9c9");
    }

    #[test]
    fn test_shape_fill_ignores_nested_paths() {
        let doc = parse(
            r##"<svg><g stroke-linecap="round" transform="translate(0 0)"><g><path fill="#ffc9c9"/></g></g></svg>"##,
        );

        assert!(extract_shapes(&doc).is_empty());
    }

    #[test]
    fn test_namespaced_shape() {
        let doc = parse(
            r##"<s:svg xmlns:s="http://www.w3.org/2000/svg"><s:g stroke-linecap="round" transform="translate(4 5)"><s:path fill="#ffec99"/></s:g></s:svg>"##,
        );

        assert_eq!(extract_shapes(&doc).len(), 1);
    }

    #[test]
    fn test_extract_label_with_tspans() {
        let doc = parse(
            r#"<svg><g transform="translate(100 200)"><text x="48.8" y="17.6"><tspan>Context</tspan><tspan> Management </tspan></text></g></svg>"#,
        );
        let labels = extract_labels(&doc);

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].content(), "Context Management");
        assert_approx_eq!(f32, labels[0].position().x(), 148.8);
        assert_approx_eq!(f32, labels[0].position().y(), 217.6);
    }

    #[test]
    fn test_multiline_label_uses_first_line_position() {
        let doc = parse(
            r#"<svg><g transform="translate(10 20)">
                <text x="5" y="7">Degrades Under</text>
                <text x="5" y="32">Complexity</text>
            </g></svg>"#,
        );
        let labels = extract_labels(&doc);

        assert_eq!(labels[0].content(), "Degrades Under Complexity");
        assert_eq!(labels[0].position(), Point::new(15.0, 27.0));
    }

    #[test]
    fn test_blank_first_line_is_skipped() {
        let doc = parse(
            r#"<svg><g transform="translate(0 0)">
                <text x="1" y="1">   </text>
                <text x="2" y="3">7</text>
            </g></svg>"#,
        );
        let labels = extract_labels(&doc);

        assert_eq!(labels[0].content(), "7");
        assert_eq!(labels[0].position(), Point::new(2.0, 3.0));
    }

    #[test]
    fn test_blank_spans_fall_back_to_direct_text() {
        let doc = parse(
            r#"<svg><g transform="translate(0 0)"><text> Pit Stop <tspan> </tspan></text></g></svg>"#,
        );

        assert_eq!(extract_labels(&doc)[0].content(), "Pit Stop");
    }

    #[test]
    fn test_missing_or_bad_offsets_default_to_zero() {
        let doc = parse(
            r#"<svg><g transform="translate(30 40)"><text x="wide">Label</text></g></svg>"#,
        );

        assert_eq!(extract_labels(&doc)[0].position(), Point::new(30.0, 40.0));
    }

    #[test]
    fn test_label_requires_translation_and_content() {
        let doc = parse(
            r#"<svg>
                <g><text>no transform</text></g>
                <g transform="translate(1 2)"><text></text></g>
                <g transform="translate(1 2)"><tspan>not in text</tspan></g>
            </svg>"#,
        );

        assert!(extract_labels(&doc).is_empty());
    }

    #[test]
    fn test_labels_in_document_order() {
        let doc = parse(
            r#"<svg>
                <g transform="translate(0 0)"><text>first</text></g>
                <g><g transform="translate(0 0)"><text>nested</text></g></g>
                <g transform="translate(0 0)"><text>last</text></g>
            </svg>"#,
        );
        let contents: Vec<_> = extract_labels(&doc)
            .iter()
            .map(|label| label.content().to_string())
            .collect();

        assert_eq!(contents, vec!["first", "nested", "last"]);
    }
}
