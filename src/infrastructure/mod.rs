//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Tracing setup (logging)
//! - HTTP cover loading (cover_loader)
//! - Application state (state)

pub mod config;
pub mod cover_loader;
pub mod logging;
pub mod state;

pub use cover_loader::HttpCoverLoader;
pub use state::AppState;
