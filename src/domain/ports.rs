//! Collaborator trait definitions
//!
//! The catalog core only talks to the outside world through these traits.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use crate::models::cover::CoverImage;

/// Fetches cover artwork for a book.
///
/// Implementations must not fail: errors are reported as
/// [`CoverImage::Placeholder`] and never touch catalog state.
#[async_trait]
pub trait CoverLoader: Send + Sync {
    async fn load(&self, url: &str) -> CoverImage;
}
