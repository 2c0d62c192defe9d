use serde::{Deserialize, Serialize};

/// Result of loading a book cover. Loading never fails outright: anything
/// that goes wrong yields a placeholder with the reason attached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoverImage {
    Loaded {
        url: String,
        width: u32,
        height: u32,
        /// Encoded image bytes as served.
        bytes: Vec<u8>,
    },
    Placeholder {
        url: String,
        reason: String,
    },
}

impl CoverImage {
    pub fn placeholder(url: &str, reason: impl Into<String>) -> Self {
        CoverImage::Placeholder {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            CoverImage::Loaded { url, .. } | CoverImage::Placeholder { url, .. } => url,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CoverImage::Placeholder { .. })
    }
}
