//! Services Layer
//!
//! This module contains pure business logic with no FFI concerns.
//! Services can be called directly from Rust or through the FFI layer.

pub mod catalog_service;
pub mod confirmation;
pub mod notifier;
pub mod screen;

// Re-export for convenience
pub use catalog_service::Catalog;
pub use confirmation::AddConfirmation;
pub use notifier::ChangeNotifier;
pub use screen::{CatalogScreen, render};
