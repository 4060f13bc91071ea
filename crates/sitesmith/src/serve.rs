// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `sitesmith serve` command implementation.
//!
//! Wires the SQLite store, the OpenAI gateway, and the site/image services
//! together and starts the HTTP server.

use std::sync::Arc;

use sitesmith_config::SitesmithConfig;
use sitesmith_core::{ImageGenerator, SiteStore, SitesmithError, TextGenerator};
use sitesmith_gateway::{start_server, AppState};
use sitesmith_openai::OpenAiProvider;
use sitesmith_service::{ImageCache, SiteService};
use sitesmith_storage::SqliteStore;
use tracing::info;

/// Runs the `sitesmith serve` command.
pub async fn run_serve(config: SitesmithConfig) -> Result<(), SitesmithError> {
    init_tracing();

    info!(
        database_path = %config.storage.database_path,
        "starting sitesmith serve"
    );

    let store: Arc<dyn SiteStore> = Arc::new(SqliteStore::open(&config.storage).await?);
    let provider = Arc::new(OpenAiProvider::new(&config.openai)?);
    let text: Arc<dyn TextGenerator> = provider.clone();
    let image: Arc<dyn ImageGenerator> = provider;

    let state = AppState {
        sites: Arc::new(SiteService::new(Arc::clone(&store), text)),
        images: Arc::new(ImageCache::new(store, image)),
    };

    start_server(&config.server.host, config.server.port, state).await
}

/// Initializes the tracing subscriber.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sitesmith=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
