//! End-to-end tests for building semantic maps from drawn diagrams.
//!
//! Fixtures are drawn with the `svg` crate the same way the diagramming tool
//! lays out its export: shape groups carry `stroke-linecap` and a translated
//! `path`, text groups carry one `text` element per line.

use semmap::{
    INTERACTIVE_CLASS, MapBuilder, NON_INTERACTIVE_CLASS, SemmapError, config::AppConfig,
    document::Element,
};
use semmap_parser::error::ErrorCode;
use svg::node::element::{Group, Path, Rectangle, Text};

fn shape_group(x: f32, y: f32, fill: &str) -> Group {
    Group::new()
        .set("stroke-linecap", "round")
        .set(
            "transform",
            format!("translate({x} {y}) rotate(0 26.7 26.2)"),
        )
        .add(
            Path::new()
                .set("fill", fill)
                .set("stroke", "#1e1e1e")
                .set("stroke-width", "1")
                .set("d", "M21.58 0.31 C26.98 -0.69, 35.41 1.37, 40.59 4.25"),
        )
}

fn text_line(y: &str, content: &str) -> Text {
    Text::new(content).set("x", "48.8").set("y", y)
}

fn text_group(x: f32, y: f32, content: &str) -> Group {
    Group::new()
        .set(
            "transform",
            format!("translate({x} {y}) rotate(0 48.8 25.1)"),
        )
        .add(text_line("17.6", content))
}

fn multi_line_text_group(x: f32, y: f32, first: &str, second: &str) -> Group {
    text_group(x, y, first).add(text_line("42.6", second))
}

fn diagram(groups: Vec<Group>) -> String {
    groups
        .into_iter()
        .fold(
            svg::Document::new().set("viewBox", (0, 0, 1000, 1000)),
            |document, group| document.add(group),
        )
        .to_string()
}

fn minimal_diagram() -> String {
    diagram(vec![
        shape_group(500.0, 300.0, "#b2f2bb"),
        text_group(505.0, 305.0, "Context Management"),
        text_group(498.0, 318.0, "1"),
        shape_group(200.0, 200.0, "#ffc9c9"),
        multi_line_text_group(205.0, 205.0, "Cannot", "Learn"),
        shape_group(100.0, 850.0, "#ffec99"),
        text_group(110.0, 855.0, "Anti-Pattern"),
        shape_group(150.0, 850.0, "#a5d8ff"),
        text_group(155.0, 855.0, "Pit Stop"),
    ])
}

fn class_groups(root: &Element) -> Vec<&Element> {
    root.child_elements()
        .filter(|child| child.has_attribute("class"))
        .collect()
}

fn find_by_label<'a>(groups: &[&'a Element], label: &str) -> &'a Element {
    groups
        .iter()
        .copied()
        .find(|group| group.attribute("data-label") == Some(label))
        .unwrap_or_else(|| panic!("No group labelled {label}"))
}

#[test]
fn test_identify_separates_legend_from_content() {
    let source = diagram(vec![
        shape_group(10.0, 10.0, "#b2f2bb"),
        text_group(15.0, 15.0, "Pattern"),
        shape_group(200.0, 200.0, "#b2f2bb"),
        text_group(205.0, 205.0, "Test Pattern"),
    ]);

    let builder = MapBuilder::default();
    let document = builder.parse(&source).expect("Failed to parse");
    let elements = builder.identify(&document);

    assert_eq!(elements.legend_count(), 1);
    assert_eq!(elements.interactive_count(), 1);
    assert_eq!(elements.legend[0].display_name(), Some("Pattern"));
    assert_eq!(elements.interactive[0].display_name(), Some("Test Pattern"));
}

#[test]
fn test_minimal_diagram_counts() {
    let builder = MapBuilder::default();
    let document = builder.parse(&minimal_diagram()).expect("Failed to parse");

    let map = builder.build_semantic_map(&document);

    assert_eq!(map.interactive_count(), 2);
    assert_eq!(map.legend_count(), 2);
}

#[test]
fn test_minimal_diagram_interactive_attributes() {
    let builder = MapBuilder::default();
    let document = builder.parse(&minimal_diagram()).expect("Failed to parse");
    let map = builder.build_semantic_map(&document);

    let groups = class_groups(map.document().root());
    let context = find_by_label(&groups, "Context Management");
    let cannot_learn = find_by_label(&groups, "Cannot Learn");

    assert_eq!(context.attribute("class"), Some(INTERACTIVE_CLASS));
    assert_eq!(context.attribute("data-color"), Some("pattern"));
    assert_eq!(context.attribute("data-number"), Some("1"));
    assert_eq!(context.child_elements().count(), 3);

    assert_eq!(cannot_learn.attribute("data-color"), Some("obstacle"));
    assert_eq!(cannot_learn.attribute("data-number"), None);
    assert_eq!(cannot_learn.child_elements().count(), 2);
}

#[test]
fn test_pit_stop_swatch_is_not_interactive() {
    let builder = MapBuilder::default();
    let document = builder.parse(&minimal_diagram()).expect("Failed to parse");
    let map = builder.build_semantic_map(&document);

    let pit_stop = map
        .elements()
        .legend
        .iter()
        .find(|node| node.shape().fill() == "#a5d8ff")
        .expect("Pit stop swatch should be in the legend");

    assert!(!pit_stop.is_interactive());
}

#[test]
fn test_restructure_replaces_primitives_with_groups() {
    let source = diagram(vec![
        shape_group(200.0, 200.0, "#b2f2bb"),
        text_group(205.0, 205.0, "Test Pattern"),
    ]);

    let builder = MapBuilder::default();
    let document = builder.parse(&source).expect("Failed to parse");
    let map = builder.build_semantic_map(&document);

    let root = map.document().root();
    let groups = class_groups(root);

    assert_eq!(root.child_elements().count(), 1);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].attribute("data-label"), Some("Test Pattern"));
}

#[test]
fn test_legend_groups_come_first() {
    let builder = MapBuilder::default();
    let document = builder.parse(&minimal_diagram()).expect("Failed to parse");
    let map = builder.build_semantic_map(&document);

    let groups = class_groups(map.document().root());
    let legend = map.legend_count();

    assert_eq!(groups.len(), legend + map.interactive_count());
    assert!(
        groups[legend..]
            .iter()
            .all(|group| group.attribute("class") == Some(INTERACTIVE_CLASS))
    );
    assert!(groups[..legend].iter().any(|group| {
        group.attribute("class") == Some(NON_INTERACTIVE_CLASS)
            && group.attribute("data-type") == Some("Anti-Pattern")
    }));
}

#[test]
fn test_unmatched_shape_is_dropped() {
    let source = diagram(vec![
        shape_group(100.0, 100.0, "#b2f2bb"),
        text_group(900.0, 900.0, "Far Away"),
    ]);

    let builder = MapBuilder::default();
    let document = builder.parse(&source).expect("Failed to parse");
    let map = builder.build_semantic_map(&document);

    assert_eq!(map.interactive_count(), 0);
    assert_eq!(map.document().root().child_elements().count(), 0);
}

#[test]
fn test_background_rect_is_removed() {
    let source = svg::Document::new()
        .add(
            Rectangle::new()
                .set("x", "0")
                .set("y", "0")
                .set("width", "1000")
                .set("height", "1000")
                .set("fill", "#ffffff"),
        )
        .add(shape_group(200.0, 200.0, "#b2f2bb"))
        .add(text_group(205.0, 205.0, "Test Pattern"))
        .to_string();

    let builder = MapBuilder::default();
    let document = builder.parse(&source).expect("Failed to parse");
    let map = builder.build_semantic_map(&document);

    assert!(
        map.document()
            .root()
            .child_elements()
            .all(|child| !child.is("rect"))
    );
}

#[test]
fn test_rendered_map_parses_back() {
    let builder = MapBuilder::new(AppConfig::default());
    let document = builder.parse(&minimal_diagram()).expect("Failed to parse");
    let map = builder.build_semantic_map(&document);

    let svg = builder.render_svg(map.document()).expect("Failed to render");
    let reparsed = builder.parse(&svg).expect("Output should be well formed");

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(r#"data-label="Context Management""#));
    assert_eq!(
        class_groups(reparsed.root()).len(),
        map.legend_count() + map.interactive_count()
    );
}

#[test]
fn test_identify_is_stable_across_runs() {
    let builder = MapBuilder::default();
    let document = builder.parse(&minimal_diagram()).expect("Failed to parse");

    assert_eq!(builder.identify(&document), builder.identify(&document));
}

#[test]
fn test_four_item_legend() {
    let legend = [
        ("#ffc9c9", "Obstacle"),
        ("#b2f2bb", "Pattern"),
        ("#ffec99", "Anti-Pattern"),
        ("#a5d8ff", "Pit Stop"),
    ];
    let groups = legend
        .iter()
        .enumerate()
        .flat_map(|(index, (fill, name))| {
            let x = 100.0 + 150.0 * index as f32;
            [shape_group(x, 850.0, fill), text_group(x + 10.0, 855.0, name)]
        })
        .chain([
            shape_group(500.0, 300.0, "#b2f2bb"),
            text_group(505.0, 305.0, "Context Management"),
        ])
        .collect();

    let builder = MapBuilder::default();
    let document = builder.parse(&diagram(groups)).expect("Failed to parse");
    let map = builder.build_semantic_map(&document);

    assert_eq!(map.legend_count(), 4);
    assert_eq!(map.interactive_count(), 1);
    assert!(map.elements().legend.iter().all(|node| !node.is_interactive()));

    // Equal distances may sort in any order after rounding
    let mut expected: Vec<_> = legend.iter().map(|(_, name)| *name).collect();
    expected.sort_unstable();

    let mut names: Vec<_> = map
        .elements()
        .legend
        .iter()
        .filter_map(|node| node.display_name())
        .collect();
    names.sort_unstable();
    assert_eq!(names, expected);

    let mut types: Vec<_> = class_groups(map.document().root())
        .into_iter()
        .filter(|group| group.attribute("class") == Some(NON_INTERACTIVE_CLASS))
        .filter_map(|group| group.attribute("data-type"))
        .collect();
    types.sort_unstable();
    assert_eq!(types, expected);
}

#[test]
fn test_deeply_nested_input_is_rejected() {
    let depth = 5_000;
    let source = format!("<svg>{}{}</svg>", "<g>".repeat(depth), "</g>".repeat(depth));

    let err = MapBuilder::default().parse(&source).unwrap_err();

    match err {
        SemmapError::Parse { err, .. } => {
            assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E105));
        }
        other => panic!("Expected a parse error, got {other}"),
    }
}
