//! Greedy pairing of shapes with name and number labels.
//!
//! Shapes are visited in order of how close their nearest name label is, so a
//! shape sitting right next to its name claims it before a farther shape can.
//! Each label is used at most once. The result depends on that order and is
//! not a globally optimal assignment.

use log::{debug, trace};

use semmap_core::semantic::{Label, MapNode, Shape};

use crate::config::MatchConfig;

/// Exclusive distance caps for the matching pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCaps {
    pub name: f32,
    pub number: f32,
}

impl Default for MatchCaps {
    fn default() -> Self {
        Self::from(&MatchConfig::default())
    }
}

impl From<&MatchConfig> for MatchCaps {
    fn from(config: &MatchConfig) -> Self {
        Self {
            name: config.name_distance(),
            number: config.number_distance(),
        }
    }
}

/// Index of the nearest label strictly within `cap` that is still available.
///
/// Ties keep the candidate seen first.
fn nearest(shape: &Shape, labels: &[&Label], used: &[bool], cap: f32) -> Option<usize> {
    let mut closest = None;
    let mut min_distance = f32::INFINITY;

    for (index, label) in labels.iter().enumerate() {
        if used[index] {
            continue;
        }
        let distance = label.distance_to(shape);
        if distance < cap && distance < min_distance {
            min_distance = distance;
            closest = Some(index);
        }
    }

    closest
}

/// Pairs shapes with labels and returns one node per shape that got any label.
///
/// Labels made only of ASCII digits are number labels, all others are name
/// labels. Nodes come out in processing order.
pub fn build_map_nodes(shapes: &[Shape], labels: &[Label], caps: MatchCaps) -> Vec<MapNode> {
    let (numbers, names): (Vec<&Label>, Vec<&Label>) =
        labels.iter().partition(|label| label.is_number());

    let no_names_used = vec![false; names.len()];
    let mut ordered: Vec<(f32, &Shape)> = shapes
        .iter()
        .map(|shape| {
            let distance = nearest(shape, &names, &no_names_used, caps.name)
                .map_or(f32::INFINITY, |index| names[index].distance_to(shape));
            (distance, shape)
        })
        .collect();
    ordered.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    let mut names_used = vec![false; names.len()];
    let mut numbers_used = vec![false; numbers.len()];
    let mut nodes = Vec::new();

    for (_, shape) in ordered {
        let name = nearest(shape, &names, &names_used, caps.name);
        let number = nearest(shape, &numbers, &numbers_used, caps.number);

        if name.is_none() && number.is_none() {
            trace!(element = shape.element().index(); "Shape has no label in range");
            continue;
        }

        if let Some(index) = name {
            names_used[index] = true;
        }
        if let Some(index) = number {
            numbers_used[index] = true;
        }

        nodes.push(MapNode::new(
            shape.clone(),
            name.map(|index| names[index].clone()),
            number.map(|index| numbers[index].clone()),
        ));
    }

    debug!(
        shapes = shapes.len(),
        nodes = nodes.len(),
        names = names.len(),
        numbers = numbers.len();
        "Matched labels to shapes"
    );
    nodes
}
