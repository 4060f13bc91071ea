// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the OpenAI chat completions and image generation APIs.

use serde::{Deserialize, Serialize};
use sitesmith_core::types::ChatMessage;

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Response body for `POST /chat/completions` (non-streaming).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

/// The assistant message inside a choice. `content` is nullable on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

/// Request body for `POST /images/generations`.
///
/// `response_format: "b64_json"` keeps the bytes inline instead of handing
/// back a short-lived URL.
#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub response_format: String,
}

/// Response body for `POST /images/generations`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationResponse {
    pub data: Vec<ImageDatum>,
}

/// One generated image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDatum {
    pub b64_json: Option<String>,
}

/// Error envelope returned by the API on non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// The error payload inside the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitesmith_core::types::ChatMessage;

    #[test]
    fn chat_request_serializes_lowercase_roles() {
        let req = ChatCompletionRequest {
            model: "gpt-4o-mini".into(),
            messages: vec![
                ChatMessage::system("be whimsical"),
                ChatMessage::user("a taco company"),
            ],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"role\":\"system\""));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"model\":\"gpt-4o-mini\""));
    }

    #[test]
    fn chat_response_tolerates_null_content() {
        let json = r#"{"choices":[{"message":{"content":null}}]}"#;
        let resp: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert!(resp.choices[0].message.content.is_none());
    }

    #[test]
    fn error_envelope_deserializes() {
        let json = r#"{"error":{"message":"Bad model","type":"invalid_request_error"}}"#;
        let resp: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.error.message, "Bad model");
        assert_eq!(resp.error.type_.as_deref(), Some("invalid_request_error"));
    }
}
