//! Catalog screen state
//!
//! The single state object behind the catalog screen: the catalog, the
//! entry-form draft, the last validation message and the "book added"
//! confirmation. The UI forwards user intents here, listens for change
//! notifications and redraws from [`CatalogScreen::render`].

use tokio::runtime::Handle;
use tokio::sync::watch;

use super::catalog_service::Catalog;
use super::confirmation::AddConfirmation;
use super::notifier::ChangeNotifier;
use crate::domain::ValidationError;
use crate::infrastructure::config::Config;
use crate::models::{Book, BookDraft, CatalogView, DraftField};

pub struct CatalogScreen {
    catalog: Catalog,
    draft: BookDraft,
    error_message: Option<String>,
    confirmation: AddConfirmation,
    notifier: ChangeNotifier,
}

impl CatalogScreen {
    /// Create an empty screen. `runtime` drives the confirmation timer.
    pub fn new(config: &Config, runtime: Handle) -> Self {
        let notifier = ChangeNotifier::new();
        let confirmation =
            AddConfirmation::new(config.confirmation_window, notifier.clone(), runtime);
        Self {
            catalog: Catalog::new(),
            draft: BookDraft::default(),
            error_message: None,
            confirmation,
            notifier,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn confirmation_visible(&self) -> bool {
        self.confirmation.is_visible()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notifier.subscribe()
    }

    pub fn revision(&self) -> u64 {
        self.notifier.revision()
    }

    pub fn update_draft(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
        self.notifier.notify();
    }

    /// Add the book currently typed into the form.
    pub fn submit_draft(&mut self) -> Result<Book, ValidationError> {
        let draft = self.draft.clone();
        self.add_book(&draft)
    }

    /// Validate and add `draft`.
    ///
    /// On success the form is cleared, any previous error is dismissed and
    /// the confirmation is (re)armed. On failure the error message is kept
    /// for display and nothing else changes.
    pub fn add_book(&mut self, draft: &BookDraft) -> Result<Book, ValidationError> {
        let result = self.catalog.add_book(draft);
        match &result {
            Ok(_) => {
                self.draft.clear();
                self.error_message = None;
                self.confirmation.arm();
            }
            Err(e) => {
                tracing::warn!("Rejected book draft: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
        self.notifier.notify();
        result
    }

    pub fn delete_book(&mut self, book: &Book) {
        self.catalog.delete_book(book);
        self.notifier.notify();
    }

    pub fn set_search_query(&mut self, query: String) {
        self.catalog.set_search_query(query);
        self.notifier.notify();
    }

    pub fn search(&self, query: &str) -> Vec<Book> {
        self.catalog.search(query)
    }

    pub fn render(&self) -> CatalogView {
        render(self)
    }
}

/// Project the screen state into the view the UI draws.
pub fn render(screen: &CatalogScreen) -> CatalogView {
    CatalogView {
        books: screen.catalog.displayed(),
        search_query: screen.catalog.search_query().to_string(),
        no_results: screen.catalog.no_results(),
        confirmation_visible: screen.confirmation.is_visible(),
        error_message: screen.error_message.clone(),
        draft: screen.draft.clone(),
        total: screen.catalog.len(),
    }
}
