//! Declarative step definitions.
//!
//! A [`StepDefinition`] is the file form of a tour step: attachment targets can
//! only be selectors here, callbacks and direct element references exist only
//! in the programmatic API of `tether-core`.

use crate::protocol::{ArrowOption, FloatingUiOverrides, Placement};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Failed to read step definition: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse step definition: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attach_to: Option<DeclarationDefinition>,
    #[serde(
        default,
        rename = "floatingUIOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub floating_ui_options: Option<FloatingUiOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<NestedDefinition>,
    #[serde(default)]
    pub arrow: ArrowOption,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_highlights: Vec<String>,
}

/// The nested `options` block some callers put their overrides under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedDefinition {
    #[serde(
        default,
        rename = "floatingUIOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub floating_ui_options: Option<FloatingUiOverrides>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeclarationDefinition {
    Many(Vec<AttachmentDefinition>),
    Single(AttachmentDefinition),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<Placement>,
}

impl StepDefinition {
    /// Parse a definition from YAML. JSON input is accepted as well.
    pub fn from_yaml(content: &str) -> Result<Self, DefinitionError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, DefinitionError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
