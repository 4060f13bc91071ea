// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Version history operations over the `prompts` and `responses` tables.
//!
//! A "version" is one prompt/response pair. Pairs are append-only; ordering
//! is reconstructed at read time from the storage-assigned `inserted_at`
//! with rowid as the tie-break.

use rusqlite::{params, OptionalExtension};
use sitesmith_core::types::SiteVersion;
use sitesmith_core::SitesmithError;

use crate::database::Database;

/// Append one prompt/response pair for `slug` in a single transaction.
///
/// Returns the new prompt id, or `None` when no site row exists for the
/// slug. The timestamp is assigned by SQLite at insert time, never by the
/// caller, so out-of-order client clocks cannot scramble the history.
pub async fn append_version(
    db: &Database,
    slug: &str,
    prompt_text: &str,
    content: &str,
) -> Result<Option<String>, SitesmithError> {
    let slug = slug.to_string();
    let prompt_text = prompt_text.to_string();
    let content = content.to_string();
    let prompt_id = uuid::Uuid::new_v4().to_string();
    let response_id = uuid::Uuid::new_v4().to_string();

    db.connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let site_exists: bool = tx.query_row(
                "SELECT EXISTS(SELECT 1 FROM sites WHERE slug = ?1)",
                params![slug],
                |row| row.get(0),
            )?;
            if !site_exists {
                return Ok(None);
            }
            tx.execute(
                "INSERT INTO prompts (id, inserted_at, site_slug, prompt)
                 VALUES (?1, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'), ?2, ?3)",
                params![prompt_id, slug, prompt_text],
            )?;
            tx.execute(
                "INSERT INTO responses (id, prompt_id, website) VALUES (?1, ?2, ?3)",
                params![response_id, prompt_id, content],
            )?;
            tx.commit()?;
            Ok(Some(prompt_id))
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// The response content attached to the most-recently-inserted prompt.
///
/// Returns `(site_exists, content)`; `content` is `None` when the site has
/// no versions. Equal timestamps resolve by prompt rowid, then response
/// rowid, so the result is deterministic even for same-millisecond appends.
pub async fn current_content(
    db: &Database,
    slug: &str,
) -> Result<(bool, Option<String>), SitesmithError> {
    let slug = slug.to_string();
    db.connection()
        .call(move |conn| {
            let site_exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM sites WHERE slug = ?1)",
                params![slug],
                |row| row.get(0),
            )?;
            if !site_exists {
                return Ok((false, None));
            }
            let content = conn
                .query_row(
                    "SELECT r.website
                     FROM responses r
                     INNER JOIN prompts p ON r.prompt_id = p.id
                     WHERE p.site_slug = ?1
                     ORDER BY p.inserted_at DESC, p.rowid DESC, r.rowid DESC
                     LIMIT 1",
                    params![slug],
                    |row| row.get(0),
                )
                .optional()?;
            Ok((true, content))
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Every prompt/response pair for `slug` in ascending insertion order.
///
/// Returns `(site_exists, versions)`. An existing site with zero versions
/// yields an empty vec. The join is tolerant of a prompt carrying multiple
/// responses; each pair appears as its own entry.
pub async fn history(
    db: &Database,
    slug: &str,
) -> Result<(bool, Vec<SiteVersion>), SitesmithError> {
    let slug = slug.to_string();
    db.connection()
        .call(move |conn| {
            let site_exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM sites WHERE slug = ?1)",
                params![slug],
                |row| row.get(0),
            )?;
            if !site_exists {
                return Ok((false, Vec::new()));
            }
            let mut stmt = conn.prepare(
                "SELECT p.prompt, r.website
                 FROM prompts p
                 INNER JOIN responses r ON r.prompt_id = p.id
                 WHERE p.site_slug = ?1
                 ORDER BY p.inserted_at ASC, p.rowid ASC, r.rowid ASC",
            )?;
            let rows = stmt.query_map(params![slug], |row| {
                Ok(SiteVersion {
                    prompt: row.get(0)?,
                    content: row.get(1)?,
                })
            })?;
            let mut versions = Vec::new();
            for row in rows {
                versions.push(row?);
            }
            Ok((true, versions))
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::sites;
    use tempfile::tempdir;

    async fn setup_site(slug: &str) -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        sites::allocate_slug(&db, slug).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn append_returns_prompt_id_for_existing_site() {
        let (db, _dir) = setup_site("lunar-bakery").await;
        let id = append_version(&db, "lunar-bakery", "a moon bakery", "<html>v0</html>")
            .await
            .unwrap();
        assert!(id.is_some());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn append_refuses_unknown_site() {
        let (db, _dir) = setup_site("lunar-bakery").await;
        let id = append_version(&db, "never-created", "idea", "<html></html>")
            .await
            .unwrap();
        assert!(id.is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn current_content_tracks_latest_append() {
        let (db, _dir) = setup_site("lunar-bakery").await;
        for i in 0..3 {
            append_version(
                &db,
                "lunar-bakery",
                &format!("prompt {i}"),
                &format!("<html>v{i}</html>"),
            )
            .await
            .unwrap();
            let (exists, content) = current_content(&db, "lunar-bakery").await.unwrap();
            assert!(exists);
            assert_eq!(content.as_deref(), Some(format!("<html>v{i}</html>").as_str()));
        }
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn current_content_distinguishes_missing_site_from_empty_history() {
        let (db, _dir) = setup_site("lunar-bakery").await;

        let (exists, content) = current_content(&db, "never-created").await.unwrap();
        assert!(!exists);
        assert!(content.is_none());

        let (exists, content) = current_content(&db, "lunar-bakery").await.unwrap();
        assert!(exists);
        assert!(content.is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn history_preserves_append_order() {
        let (db, _dir) = setup_site("lunar-bakery").await;
        for i in 0..4 {
            append_version(
                &db,
                "lunar-bakery",
                &format!("prompt {i}"),
                &format!("<html>v{i}</html>"),
            )
            .await
            .unwrap();
        }

        let (exists, versions) = history(&db, "lunar-bakery").await.unwrap();
        assert!(exists);
        assert_eq!(versions.len(), 4);
        for (i, version) in versions.iter().enumerate() {
            assert_eq!(version.prompt, format!("prompt {i}"));
            assert_eq!(version.content, format!("<html>v{i}</html>"));
        }
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn history_of_versionless_site_is_empty_not_missing() {
        let (db, _dir) = setup_site("lunar-bakery").await;
        let (exists, versions) = history(&db, "lunar-bakery").await.unwrap();
        assert!(exists);
        assert!(versions.is_empty());

        let (exists, _) = history(&db, "never-created").await.unwrap();
        assert!(!exists);
        db.close().await.unwrap();
    }
}
