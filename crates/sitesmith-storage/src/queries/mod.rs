// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules, one per table family.
//!
//! Each function takes `&Database` and runs its statements on the single
//! writer thread. Functions return storage-level results; mapping missing
//! rows onto the domain error taxonomy happens in [`crate::store`].

pub mod images;
pub mod sites;
pub mod versions;
