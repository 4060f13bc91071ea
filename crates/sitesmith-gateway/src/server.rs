// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use sitesmith_core::SitesmithError;
use sitesmith_service::{ImageCache, SiteService};

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Site creation, refinement, and resolution.
    pub sites: Arc<SiteService>,
    /// Prompt-keyed image resolution.
    pub images: Arc<ImageCache>,
}

/// Assemble the gateway router over the given services.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/sites", post(handlers::post_sites))
        .route("/sites/{slug}", get(handlers::get_site))
        .route("/sites/{slug}/refine", post(handlers::post_refine))
        .route("/images/{prompt}", get(handlers::get_image))
        .route("/health", get(handlers::get_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server.
///
/// Binds to host:port and serves until the process is stopped.
pub async fn start_server(
    host: &str,
    port: u16,
    state: AppState,
) -> Result<(), SitesmithError> {
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SitesmithError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| SitesmithError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use sitesmith_test_utils::{MemoryStore, MockImageGenerator, MockTextGenerator};

    fn router_with(text: MockTextGenerator, image: MockImageGenerator) -> Router {
        let store = Arc::new(MemoryStore::new());
        let text = Arc::new(text);
        let image = Arc::new(image);
        let state = AppState {
            sites: Arc::new(SiteService::new(store.clone(), text)),
            images: Arc::new(ImageCache::new(store, image)),
        };
        build_router(state)
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let app = router_with(MockTextGenerator::new(), MockImageGenerator::returning(vec![]));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn create_site_returns_slug() {
        let app = router_with(
            MockTextGenerator::with_responses(vec![
                "Taco Cloud\n<html>tacos</html>".to_string(),
            ]),
            MockImageGenerator::returning(vec![]),
        );

        let response = app
            .oneshot(json_post("/sites", r#"{"idea": "tacos"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert_eq!(body, r#"{"slug":"taco-cloud"}"#);
    }

    #[tokio::test]
    async fn view_and_refine_round_trip() {
        let app = router_with(
            MockTextGenerator::with_responses(vec![
                "Taco Cloud\n<html>v0</html>".to_string(),
                "<html>v1</html>".to_string(),
            ]),
            MockImageGenerator::returning(vec![]),
        );

        let response = app
            .clone()
            .oneshot(json_post("/sites", r#"{"idea": "tacos"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(Request::get("/sites/taco-cloud").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "<html>v0</html>");

        let response = app
            .clone()
            .oneshot(json_post(
                "/sites/taco-cloud/refine",
                r#"{"instruction": "make it spicier"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "<html>v1</html>");

        let response = app
            .oneshot(Request::get("/sites/taco-cloud").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_string(response).await, "<html>v1</html>");
    }

    #[tokio::test]
    async fn unknown_site_is_404() {
        let app = router_with(MockTextGenerator::new(), MockImageGenerator::returning(vec![]));
        let response = app
            .oneshot(Request::get("/sites/never-created").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn generation_failure_is_502() {
        let app = router_with(
            MockTextGenerator::failing("model unavailable"),
            MockImageGenerator::returning(vec![]),
        );
        let response = app
            .oneshot(json_post("/sites", r#"{"idea": "tacos"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_string(response).await;
        assert!(body.contains("model unavailable"));
    }

    #[tokio::test]
    async fn image_endpoint_serves_png_bytes() {
        let app = router_with(
            MockTextGenerator::new(),
            MockImageGenerator::returning(vec![0x89, 0x50, 0x4E, 0x47]),
        );
        let response = app
            .oneshot(Request::get("/images/a-red-fox-256x256").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes.as_ref(), &[0x89, 0x50, 0x4E, 0x47]);
    }
}
