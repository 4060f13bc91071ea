// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed system instructions for website generation.

/// System instruction for first-time site generation.
///
/// The first-line identifier is load-bearing: [`GeneratedSite::parse`] splits
/// the reply at the first newline to recover the slug candidate.
///
/// [`GeneratedSite::parse`]: sitesmith_core::types::GeneratedSite::parse
pub const CREATE_SYSTEM_PROMPT: &str = "You are generating whimsical websites for peoples' \
fictitious new companies. Reply with a short name for the site on the first line, suitable \
for use in a URL, followed by the website itself, including embedded CSS for styling and \
JavaScript for interactivity (if necessary). Do not wrap the page in markdown backticks \
and do not include any commentary.";

/// System instruction inserted before replayed refinement history.
///
/// Refinement replies are the bare page: no identifier line, since the slug
/// is already fixed.
pub const REFINE_SYSTEM_PROMPT: &str = "The user will now refine the website. Reply with \
the complete updated website only, keeping embedded CSS and JavaScript inline. Do not wrap \
the page in markdown backticks and do not include any commentary.";
