use super::result::{ResolveError, ResolvedAttachment};
use crate::document::Document;
use crate::step::{Attachment, AttachmentSpec, CallbackTarget, Step};
use tracing::{debug, warn};

/// Resolves a step's declared attachments against a document.
///
/// Holds nothing but the document reference; every call re-reads the step and
/// re-queries the document, and target callbacks run again on each call.
pub struct AttachmentResolver<'a, D: Document> {
    document: &'a D,
}

impl<'a, D: Document> AttachmentResolver<'a, D> {
    pub fn new(document: &'a D) -> Self {
        Self { document }
    }

    /// Resolve every declared attachment, preserving declaration order.
    ///
    /// The result has one entry per declared record, including records whose
    /// target was not found. A step without `attach_to` yields an empty vector.
    pub fn resolve(
        &self,
        step: &Step<D::Element>,
    ) -> Result<Vec<ResolvedAttachment<D::Element>>, ResolveError> {
        let Some(declaration) = step.options.attach_to.as_ref() else {
            debug!(step = ?step.id, "step has no attachment, will be centered");
            return Ok(Vec::new());
        };

        declaration
            .attachments()
            .iter()
            .enumerate()
            .map(|(index, attachment)| self.resolve_attachment(step, index, attachment))
            .collect()
    }

    /// The entry positioning anchors to: the first declared attachment.
    pub fn resolve_primary(
        &self,
        step: &Step<D::Element>,
    ) -> Result<Option<ResolvedAttachment<D::Element>>, ResolveError> {
        let Some(attachment) = step
            .options
            .attach_to
            .as_ref()
            .and_then(|declaration| declaration.attachments().first())
        else {
            return Ok(None);
        };

        self.resolve_attachment(step, 0, attachment).map(Some)
    }

    /// Elements matched by the step's `extra_highlights` selectors.
    ///
    /// Every match of every selector, in declaration order, each element once.
    pub fn resolve_extra_highlights(&self, step: &Step<D::Element>) -> Vec<D::Element>
    where
        D::Element: PartialEq,
    {
        let mut highlighted: Vec<D::Element> = Vec::new();
        for selector in &step.options.extra_highlights {
            match self.document.query_selector_all(selector) {
                Ok(matches) => {
                    for element in matches {
                        if !highlighted.contains(&element) {
                            highlighted.push(element);
                        }
                    }
                }
                Err(e) => warn!(%selector, error = %e, "extra highlight selector could not be queried"),
            }
        }
        highlighted
    }

    fn resolve_attachment(
        &self,
        step: &Step<D::Element>,
        index: usize,
        attachment: &Attachment<D::Element>,
    ) -> Result<ResolvedAttachment<D::Element>, ResolveError> {
        let element = match &attachment.element {
            AttachmentSpec::Selector(selector) => self.query(selector),
            AttachmentSpec::Callback(callback) => {
                match callback(step).map_err(|source| ResolveError::Callback { index, source })? {
                    CallbackTarget::Selector(selector) => self.query(&selector),
                    CallbackTarget::Element(element) => Some(element),
                    CallbackTarget::Nothing => None,
                }
            }
            AttachmentSpec::Element(element) => Some(element.clone()),
            AttachmentSpec::Absent => None,
        };

        debug!(
            step = ?step.id,
            index,
            on = ?attachment.on,
            found = element.is_some(),
            "resolved attachment"
        );

        Ok(ResolvedAttachment::new(element, attachment.on))
    }

    /// First match for `selector`. Missing and unqueryable targets both come
    /// back as `None`.
    fn query(&self, selector: &str) -> Option<D::Element> {
        if selector.trim().is_empty() {
            return None;
        }

        match self.document.query_selector(selector) {
            Ok(Some(element)) => Some(element),
            Ok(None) => {
                warn!(%selector, "element for this step was not found");
                None
            }
            Err(e) => {
                warn!(%selector, error = %e, "attachment selector could not be queried");
                None
            }
        }
    }
}
