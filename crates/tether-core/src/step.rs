//! The slice of a tour step that attachment and positioning read.
//!
//! A [`Step`] is generic over the element handle `E` of the document it is
//! resolved against, so callbacks and direct references carry real handles.

use std::fmt;
use std::rc::Rc;
use tether_common::definition::{AttachmentDefinition, DeclarationDefinition, StepDefinition};
use tether_common::protocol::{ArrowOption, FloatingUiOverrides, Placement};

/// Error type a target callback may fail with. It is propagated unchanged.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Target callback. Receives the owning step as its explicit context.
pub type ElementCallback<E> = Rc<dyn Fn(&Step<E>) -> Result<CallbackTarget<E>, CallbackError>>;

/// What a target callback produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackTarget<E> {
    /// A selector to look up in the document.
    Selector(String),
    /// An element the callback located itself.
    Element(E),
    /// No element.
    Nothing,
}

impl<E> From<Option<E>> for CallbackTarget<E> {
    fn from(element: Option<E>) -> Self {
        element.map_or(Self::Nothing, Self::Element)
    }
}

/// How a single attachment names its target.
pub enum AttachmentSpec<E> {
    Selector(String),
    Callback(ElementCallback<E>),
    Element(E),
    Absent,
}

impl<E> AttachmentSpec<E> {
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }

    pub fn callback<F>(callback: F) -> Self
    where
        F: Fn(&Step<E>) -> Result<CallbackTarget<E>, CallbackError> + 'static,
    {
        Self::Callback(Rc::new(callback))
    }
}

impl<E: Clone> Clone for AttachmentSpec<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Selector(selector) => Self::Selector(selector.clone()),
            Self::Callback(callback) => Self::Callback(Rc::clone(callback)),
            Self::Element(element) => Self::Element(element.clone()),
            Self::Absent => Self::Absent,
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for AttachmentSpec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(selector) => f.debug_tuple("Selector").field(selector).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
            Self::Element(element) => f.debug_tuple("Element").field(element).finish(),
            Self::Absent => f.write_str("Absent"),
        }
    }
}

/// One `{ element, on }` record.
#[derive(Debug, Clone)]
pub struct Attachment<E> {
    pub element: AttachmentSpec<E>,
    pub on: Option<Placement>,
}

impl<E> Attachment<E> {
    pub fn new(element: AttachmentSpec<E>, on: Placement) -> Self {
        Self {
            element,
            on: Some(on),
        }
    }
}

/// A step attaches to one target or to several at once.
#[derive(Debug, Clone)]
pub enum AttachmentDeclaration<E> {
    Single(Attachment<E>),
    Many(Vec<Attachment<E>>),
}

impl<E> AttachmentDeclaration<E> {
    /// The declared records in caller order.
    pub fn attachments(&self) -> &[Attachment<E>] {
        match self {
            Self::Single(attachment) => std::slice::from_ref(attachment),
            Self::Many(attachments) => attachments,
        }
    }
}

impl<E> From<Attachment<E>> for AttachmentDeclaration<E> {
    fn from(attachment: Attachment<E>) -> Self {
        Self::Single(attachment)
    }
}

impl<E> From<Vec<Attachment<E>>> for AttachmentDeclaration<E> {
    fn from(attachments: Vec<Attachment<E>>) -> Self {
        Self::Many(attachments)
    }
}

#[derive(Debug, Clone)]
pub struct NestedStepOptions {
    pub floating_ui_options: Option<FloatingUiOverrides>,
}

#[derive(Debug, Clone)]
pub struct StepOptions<E> {
    pub attach_to: Option<AttachmentDeclaration<E>>,
    pub floating_ui_options: Option<FloatingUiOverrides>,
    pub options: Option<NestedStepOptions>,
    pub arrow: ArrowOption,
    pub extra_highlights: Vec<String>,
}

impl<E> Default for StepOptions<E> {
    fn default() -> Self {
        Self {
            attach_to: None,
            floating_ui_options: None,
            options: None,
            arrow: ArrowOption::default(),
            extra_highlights: Vec::new(),
        }
    }
}

impl<E> StepOptions<E> {
    /// Caller overrides in application order: nested block first, then top level.
    pub fn overrides(&self) -> impl Iterator<Item = &FloatingUiOverrides> {
        self.options
            .as_ref()
            .and_then(|nested| nested.floating_ui_options.as_ref())
            .into_iter()
            .chain(self.floating_ui_options.as_ref())
    }
}

#[derive(Debug, Clone)]
pub struct Step<E> {
    pub id: Option<String>,
    pub options: StepOptions<E>,
}

impl<E> Default for Step<E> {
    fn default() -> Self {
        Self {
            id: None,
            options: StepOptions::default(),
        }
    }
}

impl<E> Step<E> {
    pub fn new(options: StepOptions<E>) -> Self {
        Self { id: None, options }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn attach_to(mut self, declaration: impl Into<AttachmentDeclaration<E>>) -> Self {
        self.options.attach_to = Some(declaration.into());
        self
    }

    pub fn with_floating_ui_options(mut self, overrides: FloatingUiOverrides) -> Self {
        self.options.floating_ui_options = Some(overrides);
        self
    }

    pub fn with_nested_floating_ui_options(mut self, overrides: FloatingUiOverrides) -> Self {
        self.options.options = Some(NestedStepOptions {
            floating_ui_options: Some(overrides),
        });
        self
    }

    pub fn with_arrow(mut self, arrow: ArrowOption) -> Self {
        self.options.arrow = arrow;
        self
    }

    pub fn with_extra_highlights<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extra_highlights = selectors.into_iter().map(Into::into).collect();
        self
    }

    /// Build a step from its file form. Definitions only carry selectors.
    pub fn from_definition(definition: &StepDefinition) -> Self {
        let attach_to = definition.attach_to.as_ref().map(|declaration| match declaration {
            DeclarationDefinition::Single(attachment) => {
                AttachmentDeclaration::Single(attachment_from_definition(attachment))
            }
            DeclarationDefinition::Many(attachments) => AttachmentDeclaration::Many(
                attachments.iter().map(attachment_from_definition).collect(),
            ),
        });

        Self {
            id: definition.id.clone(),
            options: StepOptions {
                attach_to,
                floating_ui_options: definition.floating_ui_options.clone(),
                options: definition.options.as_ref().map(|nested| NestedStepOptions {
                    floating_ui_options: nested.floating_ui_options.clone(),
                }),
                arrow: definition.arrow,
                extra_highlights: definition.extra_highlights.clone(),
            },
        }
    }
}

fn attachment_from_definition<E>(definition: &AttachmentDefinition) -> Attachment<E> {
    Attachment {
        element: definition
            .element
            .clone()
            .map_or(AttachmentSpec::Absent, AttachmentSpec::Selector),
        on: definition.on,
    }
}
