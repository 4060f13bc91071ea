// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the sitesmith site generator.
//!
//! This crate provides the error taxonomy, domain types, parsing functions,
//! and the adapter traits that the storage and generation backends implement.
//! Everything above this crate (storage, providers, services, the HTTP
//! gateway) depends on the seams defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SitesmithError;
pub use traits::{ImageGenerator, SiteStore, TextGenerator};
pub use types::{ChatMessage, GeneratedSite, ImagePrompt, ImageSize, Role, SiteVersion};
