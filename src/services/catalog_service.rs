//! Catalog Service - the in-memory book collection
//!
//! Holds the books in insertion order together with the active search
//! query. Validation happens before a book is appended, so the collection
//! only ever contains books that passed the form rules.

use crate::domain::ValidationError;
use crate::models::{Book, BookDraft};

#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    search_query: String,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every book, oldest first.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        tracing::debug!("Search query set to {:?}", self.search_query);
    }

    /// Validate `draft` and append the resulting book.
    ///
    /// Duplicates are accepted. On error the catalog is left untouched.
    pub fn add_book(&mut self, draft: &BookDraft) -> Result<Book, ValidationError> {
        let book = Book::try_from(draft)?;
        self.books.push(book.clone());
        tracing::info!(
            "Added book {:?} by {:?} ({} in catalog)",
            book.title,
            book.author,
            self.books.len()
        );
        Ok(book)
    }

    /// Remove every book equal to `target` and reset the search query.
    ///
    /// Removing a book that is not in the catalog is a no-op for the
    /// collection; the query is reset either way.
    pub fn delete_book(&mut self, target: &Book) {
        let before = self.books.len();
        self.books.retain(|book| book != target);
        let removed = before - self.books.len();

        tracing::info!("Deleted {} copies of {:?}", removed, target.title);
        self.search_query.clear();
    }

    /// Books whose title or author contains `query`, ignoring case, in
    /// insertion order. Recomputed on every call.
    pub fn search(&self, query: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| book.matches(query))
            .cloned()
            .collect()
    }

    /// Books matching the active query.
    pub fn displayed(&self) -> Vec<Book> {
        self.search(&self.search_query)
    }

    /// The active query is non-empty and matches nothing.
    pub fn no_results(&self) -> bool {
        !self.search_query.is_empty() && !self.books.iter().any(|b| b.matches(&self.search_query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, author: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: author.to_string(),
            year: "2001".to_string(),
            genre: "Novel".to_string(),
            isbn: "1234567890".to_string(),
            cover_url: "https://example.com/c.jpg".to_string(),
        }
    }

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_book(&draft("Dune", "Frank Herbert")).unwrap();
        catalog.add_book(&draft("Emma", "Jane Austen")).unwrap();
        catalog.add_book(&draft("Children of Dune", "Frank Herbert")).unwrap();
        catalog
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut catalog = Catalog::new();
        catalog.add_book(&draft("A", "x")).unwrap();
        catalog.add_book(&draft("B", "y")).unwrap();

        let titles: Vec<_> = catalog.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn test_rejected_draft_leaves_catalog_unchanged() {
        let mut catalog = seeded();
        let mut bad = draft("X", "Y");
        bad.isbn = "123".to_string();

        assert_eq!(catalog.add_book(&bad), Err(ValidationError::InvalidIsbnLength));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_duplicates_are_accepted() {
        let mut catalog = Catalog::new();
        catalog.add_book(&draft("A", "x")).unwrap();
        catalog.add_book(&draft("A", "x")).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_search_matches_title_or_author() {
        let catalog = seeded();

        let dune: Vec<_> = catalog.search("dune").into_iter().map(|b| b.title).collect();
        assert_eq!(dune, ["Dune", "Children of Dune"]);

        let austen = catalog.search("AUSTEN");
        assert_eq!(austen.len(), 1);
        assert_eq!(austen[0].title, "Emma");

        assert!(catalog.search("tolkien").is_empty());
    }

    #[test]
    fn test_empty_search_returns_everything_in_order() {
        let catalog = seeded();
        assert_eq!(catalog.search(""), catalog.books());
    }

    #[test]
    fn test_search_is_repeatable() {
        let catalog = seeded();
        assert_eq!(catalog.search("herbert"), catalog.search("herbert"));
    }

    #[test]
    fn test_no_results_flag() {
        let mut catalog = seeded();
        assert!(!catalog.no_results());

        catalog.set_search_query("tolkien");
        assert!(catalog.no_results());
        assert!(catalog.displayed().is_empty());

        catalog.set_search_query("emma");
        assert!(!catalog.no_results());

        // Nothing to find in an empty catalog is not a "no results" state
        // until the user actually searches.
        let empty = Catalog::new();
        assert!(!empty.no_results());
    }

    #[test]
    fn test_delete_removes_all_equal_books() {
        let mut catalog = Catalog::new();
        let a = catalog.add_book(&draft("A", "x")).unwrap();
        catalog.add_book(&draft("B", "y")).unwrap();
        catalog.add_book(&draft("A", "x")).unwrap();

        catalog.delete_book(&a);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.books()[0].title, "B");
    }

    #[test]
    fn test_delete_missing_book_is_noop() {
        let mut catalog = seeded();
        let before = catalog.books().to_vec();
        let stranger = draft("Unknown", "Nobody").validate().unwrap();

        catalog.delete_book(&stranger);

        assert_eq!(catalog.books(), before.as_slice());
    }

    #[test]
    fn test_delete_resets_search_query() {
        let mut catalog = seeded();
        catalog.set_search_query("dune");
        let target = catalog.displayed()[0].clone();

        catalog.delete_book(&target);

        assert_eq!(catalog.search_query(), "");
        assert_eq!(catalog.displayed().len(), 2);
    }
}
