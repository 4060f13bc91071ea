// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt-keyed image resolution with cache-through semantics.

use std::sync::Arc;

use sitesmith_core::types::ImagePrompt;
use sitesmith_core::{ImageGenerator, SiteStore, SitesmithError};
use tracing::debug;

/// Memoizes generated images by their descriptive prompt.
///
/// The cache key is the normalized description with the size token stripped,
/// so "a-red-fox-1024x1024" and "a-red-fox-256x256" resolve to one entry:
/// whichever size populated the cache first is what every later request
/// gets back. That inconsistency is inherited deliberately; do not "fix" it
/// by keying on size.
pub struct ImageCache {
    store: Arc<dyn SiteStore>,
    generator: Arc<dyn ImageGenerator>,
}

impl ImageCache {
    pub fn new(store: Arc<dyn SiteStore>, generator: Arc<dyn ImageGenerator>) -> Self {
        Self { store, generator }
    }

    /// Resolve a raw hyphen-separated prompt into image bytes.
    ///
    /// Cache hit returns the stored bytes unchanged. On a miss the image is
    /// generated at the parsed size, stored, and returned; generation
    /// failures propagate without caching anything.
    pub async fn resolve(&self, raw_prompt: &str) -> Result<Vec<u8>, SitesmithError> {
        let parsed = ImagePrompt::parse(raw_prompt);
        if parsed.description.is_empty() {
            return Err(SitesmithError::Internal(
                "image prompt has no description".into(),
            ));
        }

        if let Some(bytes) = self.store.cached_image(&parsed.description).await? {
            debug!(key = %parsed.description, "image cache hit");
            return Ok(bytes);
        }

        debug!(key = %parsed.description, size = %parsed.size, "image cache miss");
        let bytes = self
            .generator
            .generate_image(&parsed.description, parsed.size)
            .await?;
        self.store.store_image(&parsed.description, &bytes).await?;
        Ok(bytes)
    }
}
