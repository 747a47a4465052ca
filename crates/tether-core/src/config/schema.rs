use serde::{Deserialize, Serialize};
use tether_common::protocol::{NamedMiddleware, Strategy};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TetherConfig {
    #[serde(default)]
    pub positioning: PositioningConfig,
}

/// Defaults the positioning configurator starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositioningConfig {
    #[serde(default)]
    pub strategy: Strategy,
    /// Arrow padding for edge-aligned placements when the step sets none.
    #[serde(default = "default_arrow_padding")]
    pub arrow_padding: f64,
    #[serde(default = "default_shift_cross_axis")]
    pub shift_cross_axis: bool,
    /// Extra default middleware for anchored steps, merged by name after the
    /// built-in entries.
    #[serde(default)]
    pub middleware: Vec<NamedMiddleware>,
}

impl Default for PositioningConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            arrow_padding: default_arrow_padding(),
            shift_cross_axis: default_shift_cross_axis(),
            middleware: Vec::new(),
        }
    }
}

fn default_arrow_padding() -> f64 {
    4.0
}

fn default_shift_cross_axis() -> bool {
    true
}
