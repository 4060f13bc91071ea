// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Site generation, refinement, and image resolution services.
//!
//! This crate is the protocol layer between the HTTP gateway and the
//! storage/generation seams: it assembles conversations, drives the
//! generation gateway, and applies the slug allocation and versioned-content
//! rules. It depends only on the traits in `sitesmith-core`, so any store or
//! generator implementation plugs in.

pub mod context;
pub mod images;
pub mod prompts;
pub mod site;

pub use images::ImageCache;
pub use site::SiteService;
