//! Shapes, labels and the map nodes assembled from them.
//!
//! Shapes and labels are lightweight records pointing back into the source
//! [`Document`](crate::document::Document) by [`ElementId`]. A [`MapNode`]
//! ties one shape to at most one name label and at most one number label.

use crate::{
    category::{CATEGORY_LEGEND_LABELS, Category, is_legend_label},
    document::ElementId,
    geometry::Point,
};

/// A filled, stroked group that represents a node box in the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    element: ElementId,
    position: Point,
    fill: String,
}

impl Shape {
    pub fn new(element: ElementId, position: Point, fill: impl Into<String>) -> Self {
        Self {
            element,
            position,
            fill: fill.into(),
        }
    }

    /// Id of the group element in the source document.
    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Fill color of the shape's first visible path.
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Category derived from the fill color.
    pub fn category(&self) -> Category {
        Category::from_fill(&self.fill)
    }
}

/// A positioned text group.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    element: ElementId,
    position: Point,
    content: String,
}

impl Label {
    pub fn new(element: ElementId, position: Point, content: impl Into<String>) -> Self {
        Self {
            element,
            position,
            content: content.into(),
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// A number label consists solely of ASCII digits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use semmap_core::{document::ElementId, geometry::Point, semantic::Label};
    /// let at = Point::default();
    /// assert!(Label::new(ElementId::new(1), at, "12").is_number());
    /// assert!(!Label::new(ElementId::new(1), at, "12a").is_number());
    /// assert!(!Label::new(ElementId::new(1), at, "").is_number());
    /// ```
    pub fn is_number(&self) -> bool {
        !self.content.is_empty() && self.content.bytes().all(|b| b.is_ascii_digit())
    }

    /// Checks whether this label is one of the legend entries.
    pub fn is_legend(&self) -> bool {
        is_legend_label(&self.content)
    }

    /// Distance from this label to a shape's anchor.
    pub fn distance_to(&self, shape: &Shape) -> f32 {
        self.position.distance_to(shape.position)
    }
}

/// A shape together with the labels matched to it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapNode {
    shape: Shape,
    name: Option<Label>,
    number: Option<Label>,
    category: Category,
}

impl MapNode {
    /// Builds a node; the category is taken from the shape's fill.
    pub fn new(shape: Shape, name: Option<Label>, number: Option<Label>) -> Self {
        let category = shape.category();
        Self {
            shape,
            name,
            number,
            category,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn name(&self) -> Option<&Label> {
        self.name.as_ref()
    }

    pub fn number(&self) -> Option<&Label> {
        self.number.as_ref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Text of the name label, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_ref().map(Label::content)
    }

    /// Text of the number label, if any.
    pub fn number_text(&self) -> Option<&str> {
        self.number.as_ref().map(Label::content)
    }

    /// Interactive nodes are the ones a viewer can click on.
    ///
    /// Pit stops and the category legend entries are never interactive.
    pub fn is_interactive(&self) -> bool {
        self.category != Category::Pitstop
            && self
                .display_name()
                .is_none_or(|name| !CATEGORY_LEGEND_LABELS.contains(&name))
    }
}

/// Map nodes split into legend and interactive content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapElements {
    pub legend: Vec<MapNode>,
    pub interactive: Vec<MapNode>,
}

impl MapElements {
    pub fn legend_count(&self) -> usize {
        self.legend.len()
    }

    pub fn interactive_count(&self) -> usize {
        self.interactive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legend.is_empty() && self.interactive.is_empty()
    }
}
