use serde::{Deserialize, Serialize};

use super::book::{Book, BookDraft};

/// Everything the catalog screen needs to draw itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    /// Books matching the current query, in insertion order.
    pub books: Vec<Book>,
    pub search_query: String,
    /// The query is non-empty and nothing matched.
    pub no_results: bool,
    /// The "book added" confirmation is on screen.
    pub confirmation_visible: bool,
    pub error_message: Option<String>,
    pub draft: BookDraft,
    /// Size of the whole catalog, ignoring the query.
    pub total: usize,
}
