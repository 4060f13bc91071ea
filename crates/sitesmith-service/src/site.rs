// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Site creation, refinement, and resolution.

use std::sync::Arc;

use sitesmith_core::types::{GeneratedSite, SiteVersion};
use sitesmith_core::{SiteStore, SitesmithError, TextGenerator};
use tracing::{debug, info};

use crate::context;

/// Orchestrates the generate -> allocate -> append pipeline for sites.
pub struct SiteService {
    store: Arc<dyn SiteStore>,
    generator: Arc<dyn TextGenerator>,
}

impl SiteService {
    pub fn new(store: Arc<dyn SiteStore>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { store, generator }
    }

    /// Generate a brand-new site from an idea and persist its first version.
    ///
    /// The model's reply carries the slug candidate on its first line; the
    /// allocator turns that into a unique slug, and the idea/content pair
    /// becomes version zero.
    pub async fn create_site(&self, idea: &str) -> Result<String, SitesmithError> {
        let messages = context::initial_messages(idea);
        let raw = self.generator.generate_text(&messages).await?;
        let site = GeneratedSite::parse(&raw)?;

        let slug = self.store.allocate_slug(&site.slug_candidate).await?;
        self.store.append_version(&slug, idea, &site.content).await?;

        info!(slug, "site created");
        Ok(slug)
    }

    /// Refine an existing site: replay its conversation, generate a new
    /// page, and append it as the next version.
    ///
    /// Fails with `UnknownSite` when the slug was never allocated and
    /// `NoHistory` when it exists without a generated version.
    pub async fn refine_site(
        &self,
        slug: &str,
        instruction: &str,
    ) -> Result<String, SitesmithError> {
        let history = self.store.history(slug).await?;
        let messages = context::refinement_messages(&history, instruction).ok_or_else(|| {
            SitesmithError::NoHistory {
                slug: slug.to_string(),
            }
        })?;
        debug!(slug, turns = history.len(), "refinement context assembled");

        let content = self.generator.generate_text(&messages).await?;
        self.store.append_version(slug, instruction, &content).await?;

        info!(slug, "site refined");
        Ok(content)
    }

    /// The current page for a slug (latest appended version).
    pub async fn current_content(&self, slug: &str) -> Result<String, SitesmithError> {
        self.store.current_content(slug).await
    }

    /// The full prompt/response history for a slug in insertion order.
    pub async fn history(&self, slug: &str) -> Result<Vec<SiteVersion>, SitesmithError> {
        self.store.history(slug).await
    }
}
