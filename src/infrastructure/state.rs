//! Application state containing the catalog screen and shared resources

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::domain::{CoverLoader, DomainError};
use crate::infrastructure::config::Config;
use crate::infrastructure::cover_loader::HttpCoverLoader;
use crate::services::CatalogScreen;

/// Application state shared across all FFI calls
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Screen state; locks are never held across an await point
    screen: Arc<Mutex<CatalogScreen>>,
    /// Cover loader used by list rows
    pub cover_loader: Arc<dyn CoverLoader>,
}

impl AppState {
    /// Create a new AppState with the HTTP cover loader
    pub fn new(config: Config, runtime: Handle) -> Result<Self, DomainError> {
        let cover_loader = Arc::new(HttpCoverLoader::new(&config)?);
        Ok(Self::with_cover_loader(config, runtime, cover_loader))
    }

    pub fn with_cover_loader(
        config: Config,
        runtime: Handle,
        cover_loader: Arc<dyn CoverLoader>,
    ) -> Self {
        let screen = CatalogScreen::new(&config, runtime);
        Self {
            config,
            screen: Arc::new(Mutex::new(screen)),
            cover_loader,
        }
    }

    /// Lock the screen state. A poisoned lock is recovered: every screen
    /// mutation leaves the state consistent before it can panic.
    pub fn screen(&self) -> MutexGuard<'_, CatalogScreen> {
        self.screen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.screen().subscribe()
    }
}
