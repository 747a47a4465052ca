//! Document query abstraction.
//!
//! Selector lookup is the only operation attachment resolution needs from the
//! page. Implementations:
//! - [`crate::html::HtmlDocument`]: a parsed HTML page (via `scraper`)
//! - Tests: in-memory mocks keyed by selector

use thiserror::Error;

/// Look up elements in the current document by CSS selector.
pub trait Document {
    /// Handle to a live element. Resolution only ever copies handles around,
    /// it never creates or destroys elements.
    type Element: Clone;

    /// Returns `Ok(Some(el))` for the first match in document order,
    /// `Ok(None)` if nothing matches, or `Err` when the query itself failed.
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>, SelectorError>;

    /// Every match in document order.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Element>, SelectorError>;
}

/// Errors that can occur while querying a document.
#[derive(Debug, Clone, Error)]
pub enum SelectorError {
    /// Invalid selector syntax
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}
