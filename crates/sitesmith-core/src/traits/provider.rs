// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation gateway traits for hosted text and image generation APIs.

use async_trait::async_trait;

use crate::error::SitesmithError;
use crate::types::{ChatMessage, ImageSize};

/// Opaque call boundary to a hosted text generation API.
///
/// The model is treated as a function of the full message sequence; prompt
/// construction happens in the service layer, not here.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the given ordered message sequence.
    ///
    /// Failures (transport errors, non-2xx statuses, unusable responses)
    /// surface as [`SitesmithError::Generation`] and are never retried here.
    async fn generate_text(&self, messages: &[ChatMessage]) -> Result<String, SitesmithError>;
}

/// Opaque call boundary to a hosted image generation API.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate raster image bytes for a descriptive prompt at the given size.
    async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
    ) -> Result<Vec<u8>, SitesmithError>;
}
