//! Separating the diagram legend from regular content.
//!
//! Legend entries are recognized by their exact label text. A shape that sits
//! within the proximity cap of any legend label is the legend swatch for it,
//! and is kept away from the regular matching pass.

use log::debug;

use semmap_core::semantic::{Label, Shape};

/// Shapes and labels split into legend and regular content.
///
/// Each list keeps the relative order of its input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendPartition {
    pub legend_labels: Vec<Label>,
    pub regular_labels: Vec<Label>,
    pub legend_shapes: Vec<Shape>,
    pub regular_shapes: Vec<Shape>,
}

fn is_near_any(shape: &Shape, labels: &[Label], proximity: f32) -> bool {
    labels
        .iter()
        .any(|label| label.distance_to(shape) < proximity)
}

/// Splits shapes and labels into legend and regular content.
///
/// # Arguments
///
/// * `shapes` - Shapes in document order.
/// * `labels` - Labels in document order.
/// * `proximity` - Exclusive distance cap between a legend label and its swatch.
pub fn partition_legend(shapes: Vec<Shape>, labels: Vec<Label>, proximity: f32) -> LegendPartition {
    let (legend_labels, regular_labels): (Vec<Label>, Vec<Label>) =
        labels.into_iter().partition(Label::is_legend);

    let (legend_shapes, regular_shapes): (Vec<Shape>, Vec<Shape>) = shapes
        .into_iter()
        .partition(|shape| is_near_any(shape, &legend_labels, proximity));

    debug!(
        legend_labels = legend_labels.len(),
        legend_shapes = legend_shapes.len(),
        regular_labels = regular_labels.len(),
        regular_shapes = regular_shapes.len();
        "Partitioned legend"
    );

    LegendPartition {
        legend_labels,
        regular_labels,
        legend_shapes,
        regular_shapes,
    }
}
