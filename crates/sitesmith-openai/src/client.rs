// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the OpenAI chat completions and image generation APIs.
//!
//! Provides [`OpenAiClient`] which handles request construction and
//! authentication. Generation failures are surfaced to the caller as-is;
//! nothing here retries.

use std::time::Duration;

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue};
use sitesmith_core::types::{ChatMessage, ImageSize};
use sitesmith_core::SitesmithError;
use tracing::debug;

use crate::types::{
    ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, ImageGenerationRequest,
    ImageGenerationResponse,
};

/// HTTP client for OpenAI API communication.
///
/// Manages authentication headers and connection pooling. The base URL is
/// configurable so tests can point it at a local mock server.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI API client.
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key for bearer authentication
    /// * `base_url` - API base, e.g. `https://api.openai.com/v1`
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, SitesmithError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {api_key}");
        headers.insert(
            "authorization",
            HeaderValue::from_str(&bearer).map_err(|e| {
                SitesmithError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| SitesmithError::Generation {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends a chat completion request and returns the assistant's text.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, SitesmithError> {
        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| SitesmithError::Generation {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model, "chat completion response received");

        if !status.is_success() {
            return Err(api_error(status, response).await);
        }

        let body: ChatCompletionResponse =
            response.json().await.map_err(|e| SitesmithError::Generation {
                message: format!("failed to parse chat completion response: {e}"),
                source: Some(Box::new(e)),
            })?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| SitesmithError::Generation {
                message: "chat completion returned no content".into(),
                source: None,
            })
    }

    /// Sends an image generation request and returns the decoded bytes.
    pub async fn image_generation(
        &self,
        model: &str,
        prompt: &str,
        size: ImageSize,
    ) -> Result<Vec<u8>, SitesmithError> {
        let request = ImageGenerationRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            size: size.to_string(),
            response_format: "b64_json".to_string(),
        };

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| SitesmithError::Generation {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model, %size, "image generation response received");

        if !status.is_success() {
            return Err(api_error(status, response).await);
        }

        let body: ImageGenerationResponse =
            response.json().await.map_err(|e| SitesmithError::Generation {
                message: format!("failed to parse image generation response: {e}"),
                source: Some(Box::new(e)),
            })?;

        let b64 = body
            .data
            .into_iter()
            .next()
            .and_then(|datum| datum.b64_json)
            .ok_or_else(|| SitesmithError::Generation {
                message: "image generation returned no data".into(),
                source: None,
            })?;

        base64::engine::general_purpose::STANDARD
            .decode(b64.as_bytes())
            .map_err(|e| SitesmithError::Generation {
                message: format!("image payload is not valid base64: {e}"),
                source: Some(Box::new(e)),
            })
    }
}

/// Turn a non-2xx response into a generation error, preferring the API's own
/// error message when the body parses.
async fn api_error(status: reqwest::StatusCode, response: reqwest::Response) -> SitesmithError {
    let body = response.text().await.unwrap_or_default();
    let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
        format!(
            "OpenAI API error ({}): {}",
            api_err.error.type_.as_deref().unwrap_or("unknown"),
            api_err.error.message
        )
    } else {
        format!("API returned {status}: {body}")
    };
    SitesmithError::Generation {
        message,
        source: None,
    }
}
