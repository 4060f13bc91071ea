// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Sitesmith integration tests.
//!
//! Provides mock generators and an in-memory store for fast, deterministic,
//! CI-runnable tests without external services.
//!
//! # Components
//!
//! - [`MockTextGenerator`] - text generation with pre-configured responses
//! - [`MockImageGenerator`] - image generation returning fixed bytes
//! - [`MemoryStore`] - in-memory [`SiteStore`](sitesmith_core::SiteStore)
//!   with the same allocation and ordering semantics as the SQLite store

pub mod memory_store;
pub mod mock_provider;

pub use memory_store::MemoryStore;
pub use mock_provider::{MockImageGenerator, MockTextGenerator};
