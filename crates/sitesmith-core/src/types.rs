// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types and parsing functions shared across the sitesmith workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::SitesmithError;

/// Maximum length of a slug candidate before disambiguation.
pub const MAX_SLUG_LEN: usize = 50;

/// Role of a chat message handed to the text generation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Supported output resolutions for image generation.
///
/// The string forms match the size tokens accepted at the end of an image
/// prompt and the `size` field of the image generation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum ImageSize {
    #[default]
    #[strum(serialize = "256x256")]
    Square256,
    #[strum(serialize = "512x512")]
    Square512,
    #[strum(serialize = "1024x1024")]
    Square1024,
}

/// One prompt/response pair stored against a slug, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteVersion {
    /// The raw user-supplied instruction (initial idea or refinement).
    pub prompt: String,
    /// The full generated website markup for that prompt.
    pub content: String,
}

/// Structured result of parsing raw model output for a new site.
///
/// The generation prompt instructs the model to put a short identifier on
/// the first line of its reply and the page itself on the lines after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    /// Slug candidate derived from the first line, normalized and bounded.
    pub slug_candidate: String,
    /// Everything after the first newline: the page markup.
    pub content: String,
}

impl GeneratedSite {
    /// Split raw model output at the first newline into a slug candidate and
    /// page content.
    ///
    /// Fails with [`SitesmithError::Generation`] when the output has no
    /// newline, no usable identifier on the first line, or no content after
    /// it.
    pub fn parse(raw: &str) -> Result<Self, SitesmithError> {
        let (first_line, rest) = raw.split_once('\n').ok_or_else(|| {
            SitesmithError::Generation {
                message: "model output has no slug line".into(),
                source: None,
            }
        })?;

        let slug_candidate = slugify(first_line);
        if slug_candidate.is_empty() {
            return Err(SitesmithError::Generation {
                message: "model output has an empty slug line".into(),
                source: None,
            });
        }

        let content = rest.trim_start_matches('\n').to_string();
        if content.trim().is_empty() {
            return Err(SitesmithError::Generation {
                message: "model output has no page content".into(),
                source: None,
            });
        }

        Ok(Self {
            slug_candidate,
            content,
        })
    }
}

/// Normalize a free-form string into a slug candidate: lowercase, spaces to
/// hyphens, alphanumerics and hyphens only, at most [`MAX_SLUG_LEN`] chars.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut last_hyphen = true; // suppress leading hyphens
    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }
    slug.truncate(MAX_SLUG_LEN);
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Structured result of parsing a raw image prompt.
///
/// Raw prompts arrive hyphen-separated from the URL path, optionally ending
/// with a recognized size token: `a-red-fox-1024x1024`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePrompt {
    /// Human-readable description with separators converted to spaces.
    /// Doubles as the cache key; the size is deliberately not part of it.
    pub description: String,
    /// Requested resolution, defaulting to 256x256 when absent.
    pub size: ImageSize,
}

impl ImagePrompt {
    /// Parse a raw hyphen-separated prompt into a description and size.
    ///
    /// A trailing `-256x256`, `-512x512`, or `-1024x1024` token selects the
    /// resolution and is stripped; anything else leaves the default. The
    /// remaining hyphens become spaces and the result is trimmed.
    pub fn parse(raw: &str) -> Self {
        let (body, size) = match strip_size_suffix(raw) {
            Some((body, size)) => (body, size),
            None => (raw, ImageSize::default()),
        };

        let description = body.replace('-', " ").trim().to_string();
        Self { description, size }
    }
}

/// Strip a recognized `-WxH` size token from the end of the prompt.
fn strip_size_suffix(raw: &str) -> Option<(&str, ImageSize)> {
    for size in [
        ImageSize::Square1024,
        ImageSize::Square512,
        ImageSize::Square256,
    ] {
        let suffix = format!("-{size}");
        if let Some(body) = raw.strip_suffix(&suffix) {
            return Some((body, size));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_serializes_lowercase() {
        let msg = ChatMessage::user("hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn image_size_round_trips_through_strings() {
        for (size, s) in [
            (ImageSize::Square256, "256x256"),
            (ImageSize::Square512, "512x512"),
            (ImageSize::Square1024, "1024x1024"),
        ] {
            assert_eq!(size.to_string(), s);
            assert_eq!(ImageSize::from_str(s).unwrap(), size);
        }
    }

    #[test]
    fn generated_site_parses_slug_line_and_content() {
        let raw = "Lunar Bakery\n<html><body>moon bread</body></html>";
        let site = GeneratedSite::parse(raw).unwrap();
        assert_eq!(site.slug_candidate, "lunar-bakery");
        assert_eq!(site.content, "<html><body>moon bread</body></html>");
    }

    #[test]
    fn generated_site_rejects_missing_newline() {
        let err = GeneratedSite::parse("just-a-slug").unwrap_err();
        assert!(err.to_string().contains("no slug line"));
    }

    #[test]
    fn generated_site_rejects_empty_content() {
        let err = GeneratedSite::parse("slug\n\n   \n").unwrap_err();
        assert!(err.to_string().contains("no page content"));
    }

    #[test]
    fn generated_site_rejects_unusable_slug_line() {
        let err = GeneratedSite::parse("???\n<html></html>").unwrap_err();
        assert!(err.to_string().contains("empty slug line"));
    }

    #[test]
    fn slugify_normalizes_and_bounds() {
        assert_eq!(slugify("  Lunar Bakery!  "), "lunar-bakery");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
        assert_eq!(slugify("Caffe  &  Co."), "caffe-co");

        let long = "x".repeat(200);
        assert_eq!(slugify(&long).len(), MAX_SLUG_LEN);
    }

    #[test]
    fn image_prompt_strips_recognized_size_token() {
        let parsed = ImagePrompt::parse("a-red-fox-1024x1024");
        assert_eq!(parsed.description, "a red fox");
        assert_eq!(parsed.size, ImageSize::Square1024);

        let parsed = ImagePrompt::parse("a-red-fox-512x512");
        assert_eq!(parsed.description, "a red fox");
        assert_eq!(parsed.size, ImageSize::Square512);
    }

    #[test]
    fn image_prompt_defaults_to_256() {
        let parsed = ImagePrompt::parse("a-red-fox");
        assert_eq!(parsed.description, "a red fox");
        assert_eq!(parsed.size, ImageSize::Square256);

        // Unrecognized size-like suffix stays part of the description.
        let parsed = ImagePrompt::parse("a-red-fox-300x300");
        assert_eq!(parsed.description, "a red fox 300x300");
        assert_eq!(parsed.size, ImageSize::Square256);
    }

    #[test]
    fn image_prompt_key_ignores_size() {
        // Different sizes of the same description share one cache key.
        let a = ImagePrompt::parse("a-red-fox-1024x1024");
        let b = ImagePrompt::parse("a-red-fox-256x256");
        assert_eq!(a.description, b.description);
        assert_ne!(a.size, b.size);
    }
}
