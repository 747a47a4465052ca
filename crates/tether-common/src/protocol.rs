use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Side of the target a tooltip prefers, in the placement engine's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
    Auto,
    AutoStart,
    AutoEnd,
    Center,
}

impl Placement {
    /// Whether the engine should pick the side itself (`auto`, `auto-start`, `auto-end`).
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto | Self::AutoStart | Self::AutoEnd)
    }

    /// Edge alignment carried by a `*-start` / `*-end` placement.
    pub fn alignment(self) -> Option<Alignment> {
        match self {
            Self::TopStart
            | Self::BottomStart
            | Self::LeftStart
            | Self::RightStart
            | Self::AutoStart => Some(Alignment::Start),
            Self::TopEnd | Self::BottomEnd | Self::LeftEnd | Self::RightEnd | Self::AutoEnd => {
                Some(Alignment::End)
            }
            Self::Top | Self::Bottom | Self::Left | Self::Right | Self::Auto | Self::Center => None,
        }
    }

    pub fn is_edge_aligned(self) -> bool {
        self.alignment().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
            Self::Auto => "auto",
            Self::AutoStart => "auto-start",
            Self::AutoEnd => "auto-end",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    End,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// CSS positioning strategy used by the placement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Absolute,
    Fixed,
}

/// A positioning adjustment identified by name, e.g. `flip` or `shift`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedMiddleware {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,
}

impl NamedMiddleware {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
        }
    }

    pub fn with_options(name: impl Into<String>, options: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            options: Some(options),
        }
    }

    /// Look up a single option value by key.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.as_ref().and_then(|opts| opts.get(key))
    }
}

/// Options object handed to the external placement engine.
///
/// Serializes to `{ "strategy", "placement"?, "middleware": [...], ...extra }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PositioningOptions {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(default)]
    pub middleware: Vec<NamedMiddleware>,
    /// Passthrough fields the engine understands but this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PositioningOptions {
    /// Find a middleware entry by name.
    pub fn middleware_named(&self, name: &str) -> Option<&NamedMiddleware> {
        self.middleware.iter().find(|m| m.name == name)
    }
}

/// Caller-declared overrides; every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatingUiOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middleware: Option<Vec<NamedMiddleware>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FloatingUiOverrides {
    pub fn is_empty(&self) -> bool {
        self.strategy.is_none()
            && self.placement.is_none()
            && self.middleware.is_none()
            && self.extra.is_empty()
    }
}

/// Step arrow setting: `true`/`false`, or an object carrying a padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrowOption {
    Toggle(bool),
    Settings(ArrowSettings),
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrowSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

impl Default for ArrowOption {
    fn default() -> Self {
        Self::Toggle(true)
    }
}

impl ArrowOption {
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Toggle(enabled) => *enabled,
            Self::Settings(_) => true,
        }
    }

    /// Caller-supplied padding, if the arrow was configured with one.
    pub fn padding(&self) -> Option<f64> {
        match self {
            Self::Toggle(_) => None,
            Self::Settings(settings) => settings.padding,
        }
    }
}
