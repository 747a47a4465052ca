use crate::step::CallbackError;
use serde::Serialize;
use tether_common::protocol::Placement;
use thiserror::Error;

/// A declared attachment after its target has been looked up.
///
/// `element` is `None` when the target could not be found; that is a normal
/// outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAttachment<E> {
    pub element: Option<E>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<Placement>,
}

impl<E> Default for ResolvedAttachment<E> {
    fn default() -> Self {
        Self {
            element: None,
            on: None,
        }
    }
}

impl<E> ResolvedAttachment<E> {
    pub fn new(element: Option<E>, on: Option<Placement>) -> Self {
        Self { element, on }
    }

    /// Element and side to anchor to, or `None` if the step must be centered.
    pub fn anchor(&self) -> Option<(&E, Placement)> {
        self.element.as_ref().zip(self.on)
    }

    /// True unless both a live element and a placement are present.
    pub fn should_center(&self) -> bool {
        self.anchor().is_none()
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Attachment callback #{index} failed: {source}")]
    Callback {
        index: usize,
        #[source]
        source: CallbackError,
    },
}
