// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation assembly for generation and refinement calls.
//!
//! Rebuilds a model-ready message sequence from a slug's stored history so a
//! refinement call sees the full prior conversation in insertion order.

use sitesmith_core::types::{ChatMessage, SiteVersion};

use crate::prompts::{CREATE_SYSTEM_PROMPT, REFINE_SYSTEM_PROMPT};

/// Messages for a first-time site generation call: the fixed system
/// instruction followed by the user's idea.
pub fn initial_messages(idea: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(CREATE_SYSTEM_PROMPT),
        ChatMessage::user(idea),
    ]
}

/// Messages for a refinement call against a slug with stored history.
///
/// Layout: creation system instruction, the first stored pair as a
/// user/assistant exchange, the refinement-mode system instruction, every
/// subsequent pair in ascending order, and the new refinement text as the
/// final user message. Returns `None` when the history is empty: a site that
/// was never generated cannot be refined.
pub fn refinement_messages(history: &[SiteVersion], refinement: &str) -> Option<Vec<ChatMessage>> {
    let (first, rest) = history.split_first()?;

    let mut messages = Vec::with_capacity(2 * history.len() + 3);
    messages.push(ChatMessage::system(CREATE_SYSTEM_PROMPT));
    messages.push(ChatMessage::user(&first.prompt));
    messages.push(ChatMessage::assistant(&first.content));
    messages.push(ChatMessage::system(REFINE_SYSTEM_PROMPT));
    for version in rest {
        messages.push(ChatMessage::user(&version.prompt));
        messages.push(ChatMessage::assistant(&version.content));
    }
    messages.push(ChatMessage::user(refinement));
    Some(messages)
}
