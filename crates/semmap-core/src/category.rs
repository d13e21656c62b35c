//! Node categories and the fill colors that identify them.
//!
//! The drawing tool has no notion of node kinds; authors encode them by fill
//! color. [`Category::from_fill`] maps a fill token back to a category.
//!
//! | Fill      | Category      |
//! |-----------|---------------|
//! | `#ffc9c9` | `obstacle`    |
//! | `#b2f2bb` | `pattern`     |
//! | `#ffec99` | `antipattern` |
//! | `#a5d8ff` | `pitstop`     |
//! | other     | `unknown`     |

use std::fmt;

/// Fill colors checked in order; the first one contained in the token wins.
const FILL_TABLE: [(&str, Category); 4] = [
    ("#ffc9c9", Category::Obstacle),
    ("#b2f2bb", Category::Pattern),
    ("#ffec99", Category::Antipattern),
    ("#a5d8ff", Category::Pitstop),
];

/// Label text of the legend entry for pit stops.
pub const PIT_STOP_LABEL: &str = "Pit Stop";

/// Legend entries that name a category and must never become interactive.
pub const CATEGORY_LEGEND_LABELS: [&str; 3] = ["Obstacle", "Anti-Pattern", "Pattern"];

/// All label texts that belong to the diagram legend.
pub const LEGEND_LABELS: [&str; 4] = ["Obstacle", "Anti-Pattern", "Pattern", PIT_STOP_LABEL];

/// The kind of a diagram node, derived from its fill color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    Obstacle,
    Pattern,
    Antipattern,
    Pitstop,
    #[default]
    Unknown,
}

impl Category {
    /// Classifies a fill color token.
    ///
    /// Matching is by substring so tokens carrying extra formatting still
    /// classify. Anything unrecognized is [`Category::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use semmap_core::category::Category;
    /// assert_eq!(Category::from_fill("#b2f2bb"), Category::Pattern);
    /// assert_eq!(Category::from_fill(" #ffc9c9 "), Category::Obstacle);
    /// assert_eq!(Category::from_fill("#123456"), Category::Unknown);
    /// ```
    pub fn from_fill(fill: &str) -> Self {
        FILL_TABLE
            .iter()
            .find(|(color, _)| fill.contains(color))
            .map(|(_, category)| *category)
            .unwrap_or_default()
    }

    /// Returns the name used in the `data-color` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Obstacle => "obstacle",
            Self::Pattern => "pattern",
            Self::Antipattern => "antipattern",
            Self::Pitstop => "pitstop",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Checks whether a label text is one of the legend entries.
pub fn is_legend_label(content: &str) -> bool {
    LEGEND_LABELS.contains(&content)
}
