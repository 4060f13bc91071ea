// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles POST /sites, POST /sites/{slug}/refine, GET /sites/{slug},
//! GET /images/{prompt}, GET /health.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use sitesmith_core::SitesmithError;

use crate::server::AppState;

/// Request body for POST /sites.
#[derive(Debug, Deserialize)]
pub struct CreateSiteRequest {
    /// The user's idea for the fictitious company.
    pub idea: String,
}

/// Response body for POST /sites.
#[derive(Debug, Serialize)]
pub struct CreateSiteResponse {
    /// The slug the new site was allocated under.
    pub slug: String,
}

/// Request body for POST /sites/{slug}/refine.
#[derive(Debug, Deserialize)]
pub struct RefineSiteRequest {
    /// The refinement instruction to apply to the current site.
    pub instruction: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Wrapper that maps domain errors onto HTTP statuses.
///
/// Missing sites and histories become 404, generation failures become 502
/// (the upstream model is the gateway's upstream), everything else is 500.
pub struct ApiError(SitesmithError);

impl From<SitesmithError> for ApiError {
    fn from(err: SitesmithError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            err if err.is_not_found() => StatusCode::NOT_FOUND,
            SitesmithError::Generation { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            warn!(error = %self.0, "request failed");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// POST /sites
///
/// Generates a brand-new site from an idea and returns its slug.
pub async fn post_sites(
    State(state): State<AppState>,
    Json(body): Json<CreateSiteRequest>,
) -> Result<Json<CreateSiteResponse>, ApiError> {
    let slug = state.sites.create_site(&body.idea).await?;
    Ok(Json(CreateSiteResponse { slug }))
}

/// POST /sites/{slug}/refine
///
/// Applies a refinement instruction to an existing site and returns the new
/// current page.
pub async fn post_refine(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<RefineSiteRequest>,
) -> Result<Html<String>, ApiError> {
    let content = state.sites.refine_site(&slug, &body.instruction).await?;
    Ok(Html(content))
}

/// GET /sites/{slug}
///
/// Serves the current page for a slug.
pub async fn get_site(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ApiError> {
    let content = state.sites.current_content(&slug).await?;
    Ok(Html(content))
}

/// GET /images/{prompt}
///
/// Resolves a hyphen-separated image prompt to PNG bytes, generating and
/// caching on first request.
pub async fn get_image(
    State(state): State<AppState>,
    Path(prompt): Path<String>,
) -> Result<Response, ApiError> {
    let bytes = state.images.resolve(&prompt).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response())
}

/// GET /health
///
/// Returns health status of the gateway.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
