// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image cache operations over the `images` table.

use rusqlite::{params, OptionalExtension};
use sitesmith_core::SitesmithError;

use crate::database::Database;

/// Fetch cached image bytes by normalized description key.
pub async fn fetch_image(db: &Database, key: &str) -> Result<Option<Vec<u8>>, SitesmithError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| {
            let bytes = conn
                .query_row(
                    "SELECT image_data FROM images WHERE prompt = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(bytes)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Store image bytes under a description key.
///
/// Two concurrent misses for the same key may both reach this insert; the
/// conflict clause discards the second write so the race stays benign and
/// the first stored bytes win.
pub async fn save_image(db: &Database, key: &str, bytes: &[u8]) -> Result<(), SitesmithError> {
    let key = key.to_string();
    let bytes = bytes.to_vec();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO images (prompt, image_data) VALUES (?1, ?2)
                 ON CONFLICT (prompt) DO NOTHING",
                params![key, bytes],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
