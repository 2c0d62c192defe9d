// FFI API module for flutter_rust_bridge
// This module exposes the catalog screen to Flutter without any HTTP layer.
//
// ARCHITECTURE: Flutter owns the widgets and forwards user intents here. After
// each intent (or when `wait_for_change` returns) it calls `get_catalog_view`
// and redraws.

use flutter_rust_bridge::frb;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

use crate::domain::DomainError;
use crate::infrastructure::config::Config;
use crate::infrastructure::{AppState, logging};
use crate::models::{Book, BookDraft, CatalogView, CoverImage, DraftField};

// Global state (initialized once on app start)
static STATE: OnceLock<AppState> = OnceLock::new();
static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Build the runtime that drives the confirmation timer and cover fetches.
/// A single worker keeps it light on mobile while still running timers in
/// the background between FFI calls.
fn build_runtime() -> Result<Runtime, String> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("catalog-runtime")
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to create Tokio runtime: {}", e))
}

/// Install a panic hook to prevent crashes on iOS
/// This converts panics into logs instead of aborting
fn install_panic_hook() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            let location = panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string());
            tracing::error!("FFI PANIC at {}: {}", location, message);
            eprintln!("FFI PANIC at {}: {}", location, message);
        }));
    });
}

/// Get the app state (must be initialized first)
fn state() -> Result<&'static AppState, String> {
    STATE.get().ok_or_else(|| DomainError::NotInitialized.to_string())
}

// ============ FFI-Compatible Data Structures ============

/// Book structure for FFI
#[frb(dart_metadata=("freezed"))]
#[derive(Debug, Clone)]
pub struct FrbBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub isbn: String,
    pub cover_url: String,
}

impl From<Book> for FrbBook {
    fn from(book: Book) -> Self {
        FrbBook {
            title: book.title,
            author: book.author,
            year: book.year,
            genre: book.genre,
            isbn: book.isbn,
            cover_url: book.cover_url,
        }
    }
}

impl From<FrbBook> for Book {
    fn from(frb_book: FrbBook) -> Self {
        Book {
            title: frb_book.title,
            author: frb_book.author,
            year: frb_book.year,
            genre: frb_book.genre,
            isbn: frb_book.isbn,
            cover_url: frb_book.cover_url,
        }
    }
}

/// Raw entry-form contents
#[frb(dart_metadata=("freezed"))]
#[derive(Debug, Clone, Default)]
pub struct FrbBookDraft {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub isbn: String,
    pub cover_url: String,
}

impl From<FrbBookDraft> for BookDraft {
    fn from(draft: FrbBookDraft) -> Self {
        BookDraft {
            title: draft.title,
            author: draft.author,
            year: draft.year,
            genre: draft.genre,
            isbn: draft.isbn,
            cover_url: draft.cover_url,
        }
    }
}

impl From<BookDraft> for FrbBookDraft {
    fn from(draft: BookDraft) -> Self {
        FrbBookDraft {
            title: draft.title,
            author: draft.author,
            year: draft.year,
            genre: draft.genre,
            isbn: draft.isbn,
            cover_url: draft.cover_url,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FrbDraftField {
    Title,
    Author,
    Year,
    Genre,
    Isbn,
    CoverUrl,
}

impl From<FrbDraftField> for DraftField {
    fn from(field: FrbDraftField) -> Self {
        match field {
            FrbDraftField::Title => DraftField::Title,
            FrbDraftField::Author => DraftField::Author,
            FrbDraftField::Year => DraftField::Year,
            FrbDraftField::Genre => DraftField::Genre,
            FrbDraftField::Isbn => DraftField::Isbn,
            FrbDraftField::CoverUrl => DraftField::CoverUrl,
        }
    }
}

/// Everything the catalog screen draws
#[frb(dart_metadata=("freezed"))]
#[derive(Debug, Clone)]
pub struct FrbCatalogView {
    pub books: Vec<FrbBook>,
    pub search_query: String,
    pub no_results: bool,
    pub confirmation_visible: bool,
    pub error_message: Option<String>,
    pub draft: FrbBookDraft,
    pub total: u32,
    /// Revision the view was rendered at; pass it to `wait_for_change`
    pub revision: u64,
}

impl FrbCatalogView {
    fn from_view(view: CatalogView, revision: u64) -> Self {
        FrbCatalogView {
            books: view.books.into_iter().map(FrbBook::from).collect(),
            search_query: view.search_query,
            no_results: view.no_results,
            confirmation_visible: view.confirmation_visible,
            error_message: view.error_message,
            draft: view.draft.into(),
            total: u32::try_from(view.total).unwrap_or(u32::MAX),
            revision,
        }
    }
}

/// Cover artwork for one list row
#[frb(dart_metadata=("freezed"))]
#[derive(Debug, Clone)]
pub struct FrbCover {
    pub url: String,
    pub loaded: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub bytes: Option<Vec<u8>>,
    pub placeholder_reason: Option<String>,
}

impl From<CoverImage> for FrbCover {
    fn from(cover: CoverImage) -> Self {
        match cover {
            CoverImage::Loaded {
                url,
                width,
                height,
                bytes,
            } => FrbCover {
                url,
                loaded: true,
                width: Some(width),
                height: Some(height),
                bytes: Some(bytes),
                placeholder_reason: None,
            },
            CoverImage::Placeholder { url, reason } => FrbCover {
                url,
                loaded: false,
                width: None,
                height: None,
                bytes: None,
                placeholder_reason: Some(reason),
            },
        }
    }
}

// ============ Initialization ============

/// Initialize the FFI backend
/// Must be called before any other FFI functions
#[frb(sync)]
pub fn init_backend() -> Result<String, String> {
    // Install panic hook first thing to catch any panics
    install_panic_hook();

    if STATE.get().is_some() {
        return Ok("Already initialized".to_string());
    }

    dotenvy::dotenv().ok();
    let config = Config::from_env();
    logging::init_tracing(&config.log_filter);

    if RUNTIME.get().is_none() {
        let runtime = build_runtime()?;
        if RUNTIME.set(runtime).is_err() {
            tracing::debug!("FFI: runtime initialized concurrently");
        }
    }
    let runtime = RUNTIME.get().ok_or("Runtime unavailable")?;

    let app_state = AppState::new(config, runtime.handle().clone()).map_err(|e| e.to_string())?;
    match STATE.set(app_state) {
        Ok(_) => {
            tracing::info!("FFI: catalog backend initialized");
            Ok("Backend initialized successfully".to_string())
        }
        Err(_) => Ok("Already initialized".to_string()),
    }
}

// ============ Health Check ============

/// Check if the FFI backend is healthy
#[frb(sync)]
pub fn health_check() -> String {
    if STATE.get().is_some() {
        "OK".to_string()
    } else {
        "NOT_INITIALIZED".to_string()
    }
}

/// Get the FFI backend version
#[frb(sync)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ============ Catalog API ============

/// Validate and add a book. The error string is the message to show.
#[frb(sync)]
pub fn add_book(draft: FrbBookDraft) -> Result<FrbBook, String> {
    let state = state()?;
    let draft: BookDraft = draft.into();
    state
        .screen()
        .add_book(&draft)
        .map(FrbBook::from)
        .map_err(|e| e.to_string())
}

/// Forward one keystroke of the entry form
#[frb(sync)]
pub fn update_draft_field(field: FrbDraftField, value: String) -> Result<(), String> {
    state()?.screen().update_draft(field.into(), value);
    Ok(())
}

/// Add the book currently held in the entry form
#[frb(sync)]
pub fn submit_draft() -> Result<FrbBook, String> {
    state()?
        .screen()
        .submit_draft()
        .map(FrbBook::from)
        .map_err(|e| e.to_string())
}

/// Delete every book equal to `book`; also clears the search query
#[frb(sync)]
pub fn delete_book(book: FrbBook) -> Result<(), String> {
    state()?.screen().delete_book(&Book::from(book));
    Ok(())
}

#[frb(sync)]
pub fn set_search_query(query: String) -> Result<(), String> {
    state()?.screen().set_search_query(query);
    Ok(())
}

/// Books matching `query` without changing the active query
#[frb(sync)]
pub fn search(query: String) -> Result<Vec<FrbBook>, String> {
    let books = state()?.screen().search(&query);
    Ok(books.into_iter().map(FrbBook::from).collect())
}

#[frb(sync)]
pub fn get_catalog_view() -> Result<FrbCatalogView, String> {
    let screen = state()?.screen();
    Ok(FrbCatalogView::from_view(screen.render(), screen.revision()))
}

/// The same view serialized as JSON, for hosts without generated bindings
#[frb(sync)]
pub fn get_catalog_view_json() -> Result<String, String> {
    let view = state()?.screen().render();
    serde_json::to_string(&view).map_err(|e| e.to_string())
}

#[frb(sync)]
pub fn is_confirmation_visible() -> Result<bool, String> {
    Ok(state()?.screen().confirmation_visible())
}

/// Wait until the state revision differs from `since` and return the new
/// revision. Flutter loops on this to know when to redraw.
pub async fn wait_for_change(since: u64) -> Result<u64, String> {
    let mut rx = state()?.subscribe();
    let revision = rx
        .wait_for(|rev| *rev != since)
        .await
        .map_err(|e| e.to_string())?;
    Ok(*revision)
}

/// Load the cover for a list row. Never fails; errors become placeholders.
pub async fn load_cover(url: String) -> Result<FrbCover, String> {
    let state = state()?;
    let runtime = RUNTIME.get().ok_or("Runtime unavailable")?;
    let loader = state.cover_loader.clone();

    let cover = runtime
        .spawn(async move { loader.load(&url).await })
        .await
        .map_err(|e| format!("Cover task failed: {}", e))?;
    Ok(FrbCover::from(cover))
}
