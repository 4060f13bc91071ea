// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI generation gateway for sitesmith.
//!
//! This crate implements [`TextGenerator`] and [`ImageGenerator`] for the
//! OpenAI chat completions and image generation APIs.

pub mod client;
pub mod types;

use async_trait::async_trait;

use sitesmith_config::model::OpenAiConfig;
use sitesmith_core::types::{ChatMessage, ImageSize};
use sitesmith_core::{ImageGenerator, SitesmithError, TextGenerator};
use tracing::debug;

use crate::client::OpenAiClient;

/// OpenAI-backed generation gateway.
///
/// API key resolution order: config -> `OPENAI_API_KEY` env var -> error.
#[derive(Debug)]
pub struct OpenAiProvider {
    client: OpenAiClient,
    model: String,
    image_model: String,
}

impl OpenAiProvider {
    /// Creates a new provider from the given configuration.
    pub fn new(config: &OpenAiConfig) -> Result<Self, SitesmithError> {
        let api_key = match &config.api_key {
            Some(key) => key.clone(),
            None => std::env::var("OPENAI_API_KEY").map_err(|_| {
                SitesmithError::Config(
                    "no OpenAI API key: set openai.api_key or OPENAI_API_KEY".into(),
                )
            })?,
        };

        let client = OpenAiClient::new(&api_key, &config.api_base)?;
        debug!(model = %config.model, image_model = %config.image_model, "OpenAI provider ready");

        Ok(Self {
            client,
            model: config.model.clone(),
            image_model: config.image_model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiProvider {
    async fn generate_text(&self, messages: &[ChatMessage]) -> Result<String, SitesmithError> {
        self.client.chat_completion(&self.model, messages).await
    }
}

#[async_trait]
impl ImageGenerator for OpenAiProvider {
    async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
    ) -> Result<Vec<u8>, SitesmithError> {
        self.client
            .image_generation(&self.image_model, prompt, size)
            .await
    }
}
