// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory `SiteStore` with the same observable semantics as the SQLite
//! store: conditional-insert slug allocation, append-only version history in
//! insertion order, and first-write-wins image caching.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use sitesmith_core::types::SiteVersion;
use sitesmith_core::{SiteStore, SitesmithError};

#[derive(Default)]
struct Inner {
    // slug -> version history in insertion order; an empty vec is a site
    // that was allocated but never generated.
    sites: HashMap<String, Vec<SiteVersion>>,
    images: HashMap<String, Vec<u8>>,
    prompt_seq: u64,
}

/// In-memory store for tests that do not need a real database.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// How many sites have been allocated.
    pub async fn site_count(&self) -> usize {
        self.inner.lock().await.sites.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SiteStore for MemoryStore {
    async fn allocate_slug(&self, candidate: &str) -> Result<String, SitesmithError> {
        if candidate.is_empty() {
            return Err(SitesmithError::Internal(
                "cannot allocate an empty slug".into(),
            ));
        }
        let mut inner = self.inner.lock().await;
        let mut counter: u64 = 0;
        loop {
            let slug = if counter == 0 {
                candidate.to_string()
            } else {
                format!("{candidate}-{counter}")
            };
            if !inner.sites.contains_key(&slug) {
                inner.sites.insert(slug.clone(), Vec::new());
                return Ok(slug);
            }
            counter += 1;
        }
    }

    async fn append_version(
        &self,
        slug: &str,
        prompt_text: &str,
        content: &str,
    ) -> Result<String, SitesmithError> {
        let mut inner = self.inner.lock().await;
        inner.prompt_seq += 1;
        let prompt_id = format!("prompt-{}", inner.prompt_seq);
        let versions = inner
            .sites
            .get_mut(slug)
            .ok_or_else(|| SitesmithError::UnknownSite {
                slug: slug.to_string(),
            })?;
        versions.push(SiteVersion {
            prompt: prompt_text.to_string(),
            content: content.to_string(),
        });
        Ok(prompt_id)
    }

    async fn current_content(&self, slug: &str) -> Result<String, SitesmithError> {
        let inner = self.inner.lock().await;
        let versions = inner
            .sites
            .get(slug)
            .ok_or_else(|| SitesmithError::UnknownSite {
                slug: slug.to_string(),
            })?;
        versions
            .last()
            .map(|version| version.content.clone())
            .ok_or_else(|| SitesmithError::NoHistory {
                slug: slug.to_string(),
            })
    }

    async fn history(&self, slug: &str) -> Result<Vec<SiteVersion>, SitesmithError> {
        let inner = self.inner.lock().await;
        inner
            .sites
            .get(slug)
            .cloned()
            .ok_or_else(|| SitesmithError::UnknownSite {
                slug: slug.to_string(),
            })
    }

    async fn cached_image(&self, key: &str) -> Result<Option<Vec<u8>>, SitesmithError> {
        Ok(self.inner.lock().await.images.get(key).cloned())
    }

    async fn store_image(&self, key: &str, bytes: &[u8]) -> Result<(), SitesmithError> {
        let mut inner = self.inner.lock().await;
        // First stored bytes win, matching the SQLite ON CONFLICT DO NOTHING.
        inner
            .images
            .entry(key.to_string())
            .or_insert_with(|| bytes.to_vec());
        Ok(())
    }
}
