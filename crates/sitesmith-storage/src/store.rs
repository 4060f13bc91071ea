// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the [`SiteStore`] trait.

use async_trait::async_trait;

use sitesmith_config::model::StorageConfig;
use sitesmith_core::types::SiteVersion;
use sitesmith_core::{SiteStore, SitesmithError};

use crate::database::Database;
use crate::queries;

/// SQLite-backed site store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules, mapping their missing-row results onto the domain
/// error taxonomy.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open the store at the configured path, running migrations.
    pub async fn open(config: &StorageConfig) -> Result<Self, SitesmithError> {
        let db = Database::open(&config.database_path, config.wal_mode).await?;
        Ok(Self { db })
    }

    /// Returns the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Checkpoint and release the store.
    pub async fn close(&self) -> Result<(), SitesmithError> {
        self.db.close().await
    }
}

#[async_trait]
impl SiteStore for SqliteStore {
    async fn allocate_slug(&self, candidate: &str) -> Result<String, SitesmithError> {
        if candidate.trim().is_empty() {
            return Err(SitesmithError::Internal(
                "slug candidate must not be empty".into(),
            ));
        }
        queries::sites::allocate_slug(&self.db, candidate).await
    }

    async fn append_version(
        &self,
        slug: &str,
        prompt_text: &str,
        content: &str,
    ) -> Result<String, SitesmithError> {
        queries::versions::append_version(&self.db, slug, prompt_text, content)
            .await?
            .ok_or_else(|| SitesmithError::UnknownSite {
                slug: slug.to_string(),
            })
    }

    async fn current_content(&self, slug: &str) -> Result<String, SitesmithError> {
        let (site_exists, content) = queries::versions::current_content(&self.db, slug).await?;
        if !site_exists {
            return Err(SitesmithError::UnknownSite {
                slug: slug.to_string(),
            });
        }
        content.ok_or_else(|| SitesmithError::NoHistory {
            slug: slug.to_string(),
        })
    }

    async fn history(&self, slug: &str) -> Result<Vec<SiteVersion>, SitesmithError> {
        let (site_exists, versions) = queries::versions::history(&self.db, slug).await?;
        if !site_exists {
            return Err(SitesmithError::UnknownSite {
                slug: slug.to_string(),
            });
        }
        Ok(versions)
    }

    async fn cached_image(&self, key: &str) -> Result<Option<Vec<u8>>, SitesmithError> {
        queries::images::fetch_image(&self.db, key).await
    }

    async fn store_image(&self, key: &str, bytes: &[u8]) -> Result<(), SitesmithError> {
        queries::images::save_image(&self.db, key, bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use tempfile::tempdir;

    async fn open_store() -> (Arc<SqliteStore>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let config = StorageConfig {
            database_path: dir.path().join("test.db").to_string_lossy().into_owned(),
            wal_mode: true,
        };
        let store = SqliteStore::open(&config).await.unwrap();
        (Arc::new(store), dir)
    }

    #[tokio::test]
    async fn full_site_lifecycle() {
        let (store, _dir) = open_store().await;

        let slug = store.allocate_slug("taco-cloud").await.unwrap();
        assert_eq!(slug, "taco-cloud");

        store
            .append_version(&slug, "a taco company", "<html>v0</html>")
            .await
            .unwrap();
        store
            .append_version(&slug, "make it spicier", "<html>v1</html>")
            .await
            .unwrap();

        assert_eq!(store.current_content(&slug).await.unwrap(), "<html>v1</html>");

        let history = store.history(&slug).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].prompt, "a taco company");
        assert_eq!(history[1].prompt, "make it spicier");

        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn unknown_slug_maps_to_unknown_site() {
        let (store, _dir) = open_store().await;

        let err = store.current_content("never-created").await.unwrap_err();
        assert!(matches!(err, SitesmithError::UnknownSite { .. }));

        let err = store.history("never-created").await.unwrap_err();
        assert!(matches!(err, SitesmithError::UnknownSite { .. }));

        let err = store
            .append_version("never-created", "idea", "<html></html>")
            .await
            .unwrap_err();
        assert!(matches!(err, SitesmithError::UnknownSite { .. }));
    }

    #[tokio::test]
    async fn versionless_site_maps_to_no_history() {
        let (store, _dir) = open_store().await;
        store.allocate_slug("empty-site").await.unwrap();

        let err = store.current_content("empty-site").await.unwrap_err();
        assert!(matches!(err, SitesmithError::NoHistory { .. }));

        // history() of a versionless site is an empty vec, not an error.
        assert!(store.history("empty-site").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_candidate_is_rejected_without_a_site_row() {
        let (store, _dir) = open_store().await;
        let err = store.allocate_slug("   ").await.unwrap_err();
        assert!(matches!(err, SitesmithError::Internal(_)));
    }

    #[tokio::test]
    async fn concurrent_allocations_yield_pairwise_distinct_slugs() {
        let (store, _dir) = open_store().await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.allocate_slug("popular-idea").await.unwrap()
            }));
        }

        let mut slugs = HashSet::new();
        for handle in handles {
            slugs.insert(handle.await.unwrap());
        }

        assert_eq!(slugs.len(), 8, "all allocated slugs must be distinct");
        assert!(slugs.contains("popular-idea"));
        for i in 1..8 {
            assert!(
                slugs.contains(&format!("popular-idea-{i}")),
                "expected popular-idea-{i} in {slugs:?}"
            );
        }
    }

    #[tokio::test]
    async fn image_cache_round_trip_through_trait() {
        let (store, _dir) = open_store().await;

        assert!(store.cached_image("a red fox").await.unwrap().is_none());
        store.store_image("a red fox", &[7, 7, 7]).await.unwrap();
        assert_eq!(
            store.cached_image("a red fox").await.unwrap(),
            Some(vec![7, 7, 7])
        );
    }
}
