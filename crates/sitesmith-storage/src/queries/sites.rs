// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slug allocation against the `sites` table.

use rusqlite::params;
use sitesmith_core::SitesmithError;
use tracing::debug;

use crate::database::Database;

/// Reserve a unique slug derived from `candidate`.
///
/// Loops over an atomic conditional insert: the bare candidate first, then
/// `candidate-1`, `candidate-2`, … until an insert reports a changed row.
/// `ON CONFLICT DO NOTHING` makes each attempt an insert-or-no-op, so two
/// concurrent allocations can never both win the same slug; the loser simply
/// observes zero changed rows and tries the next disambiguator.
pub async fn allocate_slug(db: &Database, candidate: &str) -> Result<String, SitesmithError> {
    let base = candidate.to_string();
    let slug = db
        .connection()
        .call(move |conn| {
            let mut counter: u64 = 0;
            loop {
                let slug = if counter == 0 {
                    base.clone()
                } else {
                    format!("{base}-{counter}")
                };
                let changed = conn.execute(
                    "INSERT INTO sites (slug) VALUES (?1) ON CONFLICT (slug) DO NOTHING",
                    params![slug],
                )?;
                if changed == 1 {
                    return Ok(slug);
                }
                counter += 1;
            }
        })
        .await
        .map_err(crate::database::map_tr_err)?;

    debug!(candidate, slug, "slug allocated");
    Ok(slug)
}

/// True if a site row exists for `slug`.
pub async fn site_exists(db: &Database, slug: &str) -> Result<bool, SitesmithError> {
    let slug = slug.to_string();
    db.connection()
        .call(move |conn| {
            let exists = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM sites WHERE slug = ?1)",
                params![slug],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn first_allocation_wins_bare_candidate() {
        let (db, _dir) = setup_db().await;
        let slug = allocate_slug(&db, "taco-cloud").await.unwrap();
        assert_eq!(slug, "taco-cloud");
        assert!(site_exists(&db, "taco-cloud").await.unwrap());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn collisions_take_smallest_free_disambiguator() {
        let (db, _dir) = setup_db().await;
        assert_eq!(allocate_slug(&db, "taco-cloud").await.unwrap(), "taco-cloud");
        assert_eq!(
            allocate_slug(&db, "taco-cloud").await.unwrap(),
            "taco-cloud-1"
        );
        assert_eq!(
            allocate_slug(&db, "taco-cloud").await.unwrap(),
            "taco-cloud-2"
        );
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn disambiguators_fill_gaps_left_by_other_candidates() {
        let (db, _dir) = setup_db().await;
        // "cafe-2" taken directly; allocating "cafe" three times must skip it.
        assert_eq!(allocate_slug(&db, "cafe-2").await.unwrap(), "cafe-2");
        assert_eq!(allocate_slug(&db, "cafe").await.unwrap(), "cafe");
        assert_eq!(allocate_slug(&db, "cafe").await.unwrap(), "cafe-1");
        assert_eq!(allocate_slug(&db, "cafe").await.unwrap(), "cafe-3");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn site_exists_is_false_for_unknown_slug() {
        let (db, _dir) = setup_db().await;
        assert!(!site_exists(&db, "never-created").await.unwrap());
        db.close().await.unwrap();
    }
}
