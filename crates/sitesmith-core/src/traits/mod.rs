// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the sitesmith seams.
//!
//! All traits use `#[async_trait]` for dynamic dispatch compatibility: the
//! service layer holds `Arc<dyn …>` handles so tests can substitute mocks.

pub mod provider;
pub mod storage;

pub use provider::{ImageGenerator, TextGenerator};
pub use storage::SiteStore;
