// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the sitesmith site generator.

use thiserror::Error;

/// The primary error type used across all sitesmith crates.
#[derive(Debug, Error)]
pub enum SitesmithError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database unreachable, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The requested slug has no site row.
    #[error("unknown site: {slug}")]
    UnknownSite { slug: String },

    /// The site exists but has no stored prompt/response versions.
    #[error("site has no history: {slug}")]
    NoHistory { slug: String },

    /// The generation API errored or returned unusable output.
    #[error("generation failed: {message}")]
    Generation {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SitesmithError {
    /// True for errors that should surface as HTTP 404 rather than 500.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SitesmithError::UnknownSite { .. } | SitesmithError::NoHistory { .. }
        )
    }
}
