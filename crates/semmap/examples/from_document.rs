//! Example: Building a semantic map from a document tree
//!
//! This example demonstrates how to assemble a drawing programmatically
//! with the document types directly, without parsing SVG text, and then
//! run it through the map builder.

use semmap::{
    MapBuilder,
    document::{Document, Element, Node},
};

/// A shape group as the drawing tool exports it.
fn shape(x: f32, y: f32, fill: &str) -> Element {
    Element::new("g")
        .with_attribute("stroke-linecap", "round")
        .with_attribute("transform", format!("translate({x} {y})"))
        .with_child(
            Element::new("path")
                .with_attribute("fill", fill)
                .with_attribute("d", "M0 0 L40 0 L40 40 Z"),
        )
}

/// A text group holding one line per entry.
fn label(x: f32, y: f32, lines: &[&str]) -> Element {
    lines.iter().enumerate().fold(
        Element::new("g").with_attribute("transform", format!("translate({x} {y})")),
        |group, (index, line)| {
            group.with_child(
                Element::new("text")
                    .with_attribute("x", "0")
                    .with_attribute("y", format!("{}", index * 25))
                    .with_child(Node::text(*line)),
            )
        },
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building drawing from document tree...\n");

    let root = Element::new("svg")
        .with_attribute("viewBox", "0 0 600 400")
        // Content
        .with_child(shape(100.0, 100.0, "#b2f2bb"))
        .with_child(label(120.0, 110.0, &["Small", "Steps"]))
        .with_child(label(95.0, 140.0, &["3"]))
        .with_child(shape(300.0, 100.0, "#ffc9c9"))
        .with_child(label(320.0, 110.0, &["Hidden State"]))
        // Legend
        .with_child(shape(50.0, 330.0, "#ffec99"))
        .with_child(label(60.0, 340.0, &["Anti-Pattern"]));

    let document = Document::new(root);

    let builder = MapBuilder::default();
    let elements = builder.identify(&document);

    println!("Identified elements:");
    for node in &elements.interactive {
        println!(
            "  {:<14} {:<12} number: {}",
            node.display_name().unwrap_or("-"),
            node.category(),
            node.number_text().unwrap_or("-")
        );
    }
    println!("  Legend entries: {}", elements.legend_count());
    println!();

    // Restructure and render using MapBuilder
    println!("Rendering to SVG...");
    let restructured = builder.restructure(&document, &elements);
    let svg = builder.render_svg(&restructured)?;

    println!("SVG generated successfully!");
    println!("SVG length: {} bytes", svg.len());

    let output_path = "from_document_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {output_path}");

    Ok(())
}
