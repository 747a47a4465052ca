pub mod config;
pub mod document;
pub mod html;
pub mod positioning;
pub mod resolution;
pub mod step;

pub use config::{ConfigError, ConfigLoader, PositioningConfig, TetherConfig};
pub use document::{Document, SelectorError};
pub use html::{HtmlDocument, HtmlElement};
pub use positioning::{Positioning, apply_overrides, configure_positioning, merge_middleware};
pub use resolution::{AttachmentResolver, ResolveError, ResolvedAttachment, should_center_step};
pub use step::{
    Attachment, AttachmentDeclaration, AttachmentSpec, CallbackError, CallbackTarget,
    ElementCallback, NestedStepOptions, Step, StepOptions,
};
pub use tether_common::protocol::*;
