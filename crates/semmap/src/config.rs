//! Configuration types for semantic map building.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field is optional and falls back to the built-in
//! defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`MatchConfig`] - Distance caps used for legend detection and label matching.
//!
//! # Example
//!
//! ```
//! # use semmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.matching().name_distance(), 150.0);
//! assert_eq!(config.matching().number_distance(), 60.0);
//! assert_eq!(config.matching().legend_proximity(), 80.0);
//! ```

use serde::Deserialize;

const DEFAULT_LEGEND_PROXIMITY: f32 = 80.0;
const DEFAULT_NAME_DISTANCE: f32 = 150.0;
const DEFAULT_NUMBER_DISTANCE: f32 = 60.0;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Matching configuration section.
    #[serde(default)]
    matching: MatchConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given matching configuration.
    pub fn new(matching: MatchConfig) -> Self {
        Self { matching }
    }

    /// Returns the matching configuration.
    pub fn matching(&self) -> &MatchConfig {
        &self.matching
    }
}

/// Distance caps, in diagram units, used when pairing labels with shapes.
///
/// Every cap is exclusive: a distance equal to the cap does not match.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MatchConfig {
    /// A shape closer than this to a legend label belongs to the legend.
    #[serde(default = "default_legend_proximity")]
    legend_proximity: f32,

    /// Maximum distance between a shape and its name label.
    #[serde(default = "default_name_distance")]
    name_distance: f32,

    /// Maximum distance between a shape and its number label.
    #[serde(default = "default_number_distance")]
    number_distance: f32,
}

impl MatchConfig {
    /// Creates a new [`MatchConfig`] with explicit caps.
    ///
    /// # Arguments
    ///
    /// * `legend_proximity` - Cap for attaching shapes to legend labels.
    /// * `name_distance` - Cap for name labels.
    /// * `number_distance` - Cap for number labels.
    pub fn new(legend_proximity: f32, name_distance: f32, number_distance: f32) -> Self {
        Self {
            legend_proximity,
            name_distance,
            number_distance,
        }
    }

    pub fn legend_proximity(&self) -> f32 {
        self.legend_proximity
    }

    pub fn name_distance(&self) -> f32 {
        self.name_distance
    }

    pub fn number_distance(&self) -> f32 {
        self.number_distance
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            legend_proximity: DEFAULT_LEGEND_PROXIMITY,
            name_distance: DEFAULT_NAME_DISTANCE,
            number_distance: DEFAULT_NUMBER_DISTANCE,
        }
    }
}

fn default_legend_proximity() -> f32 {
    DEFAULT_LEGEND_PROXIMITY
}

fn default_name_distance() -> f32 {
    DEFAULT_NAME_DISTANCE
}

fn default_number_distance() -> f32 {
    DEFAULT_NUMBER_DISTANCE
}
