pub mod book;
pub mod cover;
pub mod view;

pub use book::{Book, BookDraft, DraftField};
pub use cover::CoverImage;
pub use view::CatalogView;
