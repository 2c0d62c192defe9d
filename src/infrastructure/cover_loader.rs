//! HTTP cover loader
//!
//! Fetches cover artwork with reqwest and checks that it decodes as an image.
//! Successful loads are cached by URL; failures become placeholders and are
//! retried on the next request.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{CoverLoader, DomainError};
use crate::infrastructure::config::Config;
use crate::models::cover::CoverImage;

pub struct HttpCoverLoader {
    client: reqwest::Client,
    cache: DashMap<String, CoverImage>,
    capacity: usize,
}

impl HttpCoverLoader {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(config.cover_user_agent.as_str())
            .timeout(config.cover_timeout)
            .build()?;

        Ok(Self {
            client,
            cache: DashMap::new(),
            capacity: config.cover_cache_capacity,
        })
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    async fn fetch(&self, url: &str) -> Result<CoverImage, DomainError> {
        let parsed = url::Url::parse(url)
            .map_err(|e| DomainError::External(format!("Invalid cover URL: {}", e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::External(format!(
                "Unsupported scheme: {}",
                parsed.scheme()
            )));
        }

        let resp = self.client.get(parsed).send().await?;
        if !resp.status().is_success() {
            return Err(DomainError::External(format!("HTTP {}", resp.status())));
        }

        let bytes = resp.bytes().await?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| DomainError::External(format!("Undecodable cover: {}", e)))?;

        Ok(CoverImage::Loaded {
            url: url.to_string(),
            width: decoded.width(),
            height: decoded.height(),
            bytes: bytes.to_vec(),
        })
    }

    /// Cache `cover`, evicting other entries while the cache is full.
    ///
    /// The capacity is a soft limit: rows loading concurrently can each pass
    /// the size check before inserting, so the cache may briefly overshoot.
    /// The next insert evicts back down to the limit.
    fn remember(&self, url: &str, cover: &CoverImage) {
        if self.capacity == 0 {
            return;
        }
        if !self.cache.contains_key(url) {
            while self.cache.len() >= self.capacity {
                // Covers are cheap to refetch; never evict the one being stored
                let victim = self
                    .cache
                    .iter()
                    .map(|entry| entry.key().clone())
                    .find(|key| key != url);
                match victim {
                    Some(victim) => {
                        self.cache.remove(&victim);
                    }
                    None => break,
                }
            }
        }
        self.cache.insert(url.to_string(), cover.clone());
    }
}

#[async_trait]
impl CoverLoader for HttpCoverLoader {
    async fn load(&self, url: &str) -> CoverImage {
        if let Some(hit) = self.cache.get(url) {
            return hit.value().clone();
        }

        match self.fetch(url).await {
            Ok(cover) => {
                tracing::debug!("Loaded cover {}", url);
                self.remember(url, &cover);
                cover
            }
            Err(e) => {
                tracing::warn!("Cover {} unavailable: {}", url, e);
                CoverImage::placeholder(url, e.to_string())
            }
        }
    }
}
