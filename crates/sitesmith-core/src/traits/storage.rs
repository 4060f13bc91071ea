// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage trait for the slug allocation and versioned-content protocol.

use async_trait::async_trait;

use crate::error::SitesmithError;
use crate::types::SiteVersion;

/// Persistence seam for sites, their version history, and the image cache.
///
/// Implementations must provide atomic conditional inserts for slug
/// allocation and write each prompt/response pair as one atomic unit.
/// Components hold no connection state of their own; all concurrency
/// discipline lives behind this trait.
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// Reserve a unique slug derived from `candidate`.
    ///
    /// If the candidate is taken, deterministically appends `-1`, `-2`, …
    /// until an insert succeeds, returning the slug that won. The
    /// disambiguator is the smallest unused non-negative integer at
    /// allocation time; concurrent allocations for the same candidate never
    /// both win the same slug.
    async fn allocate_slug(&self, candidate: &str) -> Result<String, SitesmithError>;

    /// Append one prompt/response pair to an existing site, returning the
    /// new prompt's id.
    ///
    /// The pair is written in a single transaction; a Prompt row without its
    /// Response must never be observable. `UnknownSite` if the slug has no
    /// site row. Insertion timestamps are storage-assigned.
    async fn append_version(
        &self,
        slug: &str,
        prompt_text: &str,
        content: &str,
    ) -> Result<String, SitesmithError>;

    /// The response content attached to the most-recently-inserted prompt.
    ///
    /// `UnknownSite` if the slug has no site row; `NoHistory` if the site
    /// exists with zero versions. Ties on the insertion timestamp resolve
    /// by insertion sequence, not arbitrary row order.
    async fn current_content(&self, slug: &str) -> Result<String, SitesmithError>;

    /// Every prompt/response pair for the slug in ascending insertion order.
    ///
    /// An existing site with zero versions yields an empty vec, not an
    /// error; `UnknownSite` only when the site row itself is missing.
    async fn history(&self, slug: &str) -> Result<Vec<SiteVersion>, SitesmithError>;

    /// Look up cached image bytes by normalized description key.
    async fn cached_image(&self, key: &str) -> Result<Option<Vec<u8>>, SitesmithError>;

    /// Store image bytes under a description key.
    ///
    /// A duplicate-key write (two concurrent misses racing to populate the
    /// same key) is treated as success; the first stored bytes win.
    async fn store_image(&self, key: &str, bytes: &[u8]) -> Result<(), SitesmithError>;
}
