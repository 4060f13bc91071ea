// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Sitesmith services.
//!
//! Exposes site creation, refinement, viewing, and image resolution over a
//! small REST surface built on axum. All domain logic lives in
//! `sitesmith-service`; this crate only translates between HTTP and the
//! service layer, including the error-to-status mapping.

pub mod handlers;
pub mod server;

pub use server::{build_router, start_server, AppState};
