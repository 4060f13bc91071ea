// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock generation gateways for deterministic testing.
//!
//! `MockTextGenerator` and `MockImageGenerator` implement the generation
//! traits with pre-configured responses, enabling fast, CI-runnable tests
//! without external API calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use sitesmith_core::types::{ChatMessage, ImageSize};
use sitesmith_core::{ImageGenerator, SitesmithError, TextGenerator};

/// A mock text generator that returns pre-configured responses.
///
/// Responses are popped from a FIFO queue. When the queue is empty, a
/// default "mock response" text is returned. Each call records the message
/// sequence it received, retrievable via [`last_messages`].
///
/// [`last_messages`]: MockTextGenerator::last_messages
pub struct MockTextGenerator {
    responses: Arc<Mutex<VecDeque<String>>>,
    failure: Option<String>,
    calls: AtomicUsize,
    last_messages: Arc<Mutex<Option<Vec<ChatMessage>>>>,
}

impl MockTextGenerator {
    /// Create a mock generator with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            failure: None,
            calls: AtomicUsize::new(0),
            last_messages: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a mock generator pre-loaded with the given responses.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            failure: None,
            calls: AtomicUsize::new(0),
            last_messages: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a mock generator whose every call fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            failure: Some(message.into()),
            calls: AtomicUsize::new(0),
            last_messages: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a response to the end of the queue.
    pub async fn add_response(&self, text: String) {
        self.responses.lock().await.push_back(text);
    }

    /// How many times `generate_text` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The message sequence passed to the most recent call, if any.
    pub async fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.last_messages.lock().await.clone()
    }

    async fn next_response(&self) -> String {
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock response".to_string())
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate_text(&self, messages: &[ChatMessage]) -> Result<String, SitesmithError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().await = Some(messages.to_vec());

        if let Some(message) = &self.failure {
            return Err(SitesmithError::Generation {
                message: message.clone(),
                source: None,
            });
        }
        Ok(self.next_response().await)
    }
}

/// A mock image generator that returns fixed bytes.
///
/// Records the prompt and size of the most recent call so tests can assert
/// on what reached the gateway.
pub struct MockImageGenerator {
    bytes: Vec<u8>,
    failure: Option<String>,
    calls: AtomicUsize,
    last_call: std::sync::Mutex<Option<(String, ImageSize)>>,
}

impl MockImageGenerator {
    /// Create a mock generator that answers every call with the same bytes.
    pub fn returning(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            failure: None,
            calls: AtomicUsize::new(0),
            last_call: std::sync::Mutex::new(None),
        }
    }

    /// Create a mock generator whose every call fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            bytes: Vec::new(),
            failure: Some(message.into()),
            calls: AtomicUsize::new(0),
            last_call: std::sync::Mutex::new(None),
        }
    }

    /// How many times `generate_image` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The prompt passed to the most recent call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_call
            .lock()
            .ok()
            .and_then(|call| call.as_ref().map(|(prompt, _)| prompt.clone()))
    }

    /// The size passed to the most recent call, if any.
    pub fn last_size(&self) -> Option<ImageSize> {
        self.last_call
            .lock()
            .ok()
            .and_then(|call| call.as_ref().map(|(_, size)| *size))
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
    ) -> Result<Vec<u8>, SitesmithError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut call) = self.last_call.lock() {
            *call = Some((prompt.to_string(), size));
        }

        if let Some(message) = &self.failure {
            return Err(SitesmithError::Generation {
                message: message.clone(),
                source: None,
            });
        }
        Ok(self.bytes.clone())
    }
}
