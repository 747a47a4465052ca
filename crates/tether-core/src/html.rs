//! [`Document`] implementation over a parsed HTML page.

use crate::document::{Document, SelectorError};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use std::path::Path;

pub struct HtmlDocument {
    html: Html,
}

/// Owned handle to an element of an [`HtmlDocument`].
///
/// `index` is the element's position in document order, so two handles are
/// equal exactly when they point at the same node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HtmlElement {
    pub index: usize,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
}

impl HtmlDocument {
    pub fn parse(content: &str) -> Self {
        Self {
            html: Html::parse_document(content),
        }
    }

    pub fn load_from(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    fn compile(selector: &str) -> Result<Selector, SelectorError> {
        Selector::parse(selector)
            .map_err(|e| SelectorError::InvalidSelector(format!("{}: {}", selector, e)))
    }

    fn handle(&self, element: ElementRef<'_>) -> HtmlElement {
        let index = self
            .html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .position(|candidate| candidate == element)
            .unwrap_or_default();
        let value = element.value();

        HtmlElement {
            index,
            tag: value.name().to_string(),
            id: value.id().map(str::to_string),
            classes: value.classes().map(str::to_string).collect(),
        }
    }
}

impl Document for HtmlDocument {
    type Element = HtmlElement;

    fn query_selector(&self, selector: &str) -> Result<Option<HtmlElement>, SelectorError> {
        let compiled = Self::compile(selector)?;
        Ok(self
            .html
            .select(&compiled)
            .next()
            .map(|element| self.handle(element)))
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<HtmlElement>, SelectorError> {
        let compiled = Self::compile(selector)?;
        Ok(self
            .html
            .select(&compiled)
            .map(|element| self.handle(element))
            .collect())
    }
}
