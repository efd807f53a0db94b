//! JSON HTTP API and the public site route.
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | POST | `/api/generate` | bearer |
//! | GET | `/api/sites` | bearer |
//! | GET | `/api/sites/{id}` | bearer |
//! | POST | `/api/publish` | bearer |
//! | GET | `/api/export?siteId=` | bearer |
//! | GET | `/api/templates` | none |
//! | GET | `/api/industries` | none |
//! | GET | `/sites/{slug}` | none |
//! | GET | `/health` | none |
//!
//! Successful JSON responses are wrapped as `{"success": true, "data": …}`.
//! Failures are `{"error": "<message>"}` with 400, 401, 404 or 500. Server
//! failures are logged in full and reported with a generic message.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::{AuthError, Authenticator, Identity, bearer_token};
use crate::generate::{CreateSiteRequest, GenerateError, SiteGenerator};
use crate::publish::{PublishError, Publisher};
use crate::templates::{self, TemplateSummary};
use crate::types::{INDUSTRIES, Site};

/// Header carrying the SHA-256 of an exported page.
pub const CONTENT_SHA256: &str = "x-content-sha256";

// ── Shared application state ──────────────────────────────────────────

pub struct AppState {
    pub generator: SiteGenerator,
    pub publisher: Publisher,
    pub auth: Arc<dyn Authenticator>,
}

pub type SharedState = Arc<AppState>;

// ── Request / response payloads ───────────────────────────────────────

#[derive(Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        data,
    })
}

#[derive(Serialize)]
pub struct GeneratedSite {
    pub site: Site,
    pub slug: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub site_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    pub site_id: String,
}

// ── Error handling ────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ApiError {
    Unauthorized(AuthError),
    BadRequest(String),
    NotFound(String),
    /// Logged as-is; the client only sees the public message.
    Internal { public: &'static str, detail: String },
}

impl ApiError {
    fn site_not_found() -> Self {
        ApiError::NotFound("Site not found".to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError::Unauthorized(e)
    }
}

impl From<GenerateError> for ApiError {
    fn from(e: GenerateError) -> Self {
        match e {
            GenerateError::Validation { .. } | GenerateError::UnsupportedTemplate(_) => {
                ApiError::BadRequest(e.to_string())
            }
            GenerateError::Organization(_) => ApiError::Internal {
                public: "Failed to create organization",
                detail: e.to_string(),
            },
            GenerateError::Persist(_) => ApiError::Internal {
                public: "Failed to create site",
                detail: e.to_string(),
            },
            GenerateError::Copy(_) => ApiError::Internal {
                public: "Internal server error",
                detail: e.to_string(),
            },
        }
    }
}

impl From<PublishError> for ApiError {
    fn from(e: PublishError) -> Self {
        match e {
            PublishError::NotFound => ApiError::site_not_found(),
            other => ApiError::Internal {
                public: "Internal server error",
                detail: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized(e) => {
                tracing::debug!(error = %e, "rejected request");
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal { public, detail } => {
                tracing::error!(error = %detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, public.to_string())
            }
        };
        (status, Json(serde_json::json!({"error": message}))).into_response()
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/generate", post(generate_site))
        .route("/api/sites", get(list_sites))
        .route("/api/sites/{id}", get(get_site))
        .route("/api/publish", post(publish_site))
        .route("/api/export", get(export_site))
        .route("/api/templates", get(list_templates))
        .route("/api/industries", get(list_industries))
        .route("/sites/{slug}", get(public_site))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Helpers ───────────────────────────────────────────────────────────

async fn identify(state: &AppState, headers: &HeaderMap) -> Result<Identity, ApiError> {
    let token = bearer_token(headers)?;
    Ok(state.auth.authenticate(token).await?)
}

/// Malformed ids cannot name a site, so they read as "not found".
fn site_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::site_not_found())
}

// ── Handlers ──────────────────────────────────────────────────────────

async fn generate_site(
    State(state): State<SharedState>,
    headers: HeaderMap,
    payload: Result<Json<CreateSiteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let identity = identify(&state, &headers).await?;
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let site = state.generator.generate(&identity, request).await?;
    let slug = site.slug.clone();
    Ok(ok(GeneratedSite { site, slug }))
}

async fn list_sites(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let identity = identify(&state, &headers).await?;
    Ok(ok(state.publisher.list_sites(&identity).await?))
}

async fn get_site(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let identity = identify(&state, &headers).await?;
    let id = site_id(&id)?;
    Ok(ok(state.publisher.get_site(&identity, id).await?))
}

async fn publish_site(
    State(state): State<SharedState>,
    headers: HeaderMap,
    payload: Result<Json<PublishRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let identity = identify(&state, &headers).await?;
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let id = site_id(&request.site_id)?;
    Ok(ok(state.publisher.publish(&identity, id).await?))
}

async fn export_site(
    State(state): State<SharedState>,
    headers: HeaderMap,
    query: Result<Query<ExportQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let identity = identify(&state, &headers).await?;
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let id = site_id(&query.site_id)?;
    let package = state.publisher.export(&identity, id).await?;

    let disposition = format!("attachment; filename=\"{}\"", package.download_name());
    let mut response = package.index.contents.into_response();
    let response_headers = response.headers_mut();
    response_headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    // Slugs are ASCII by construction.
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        response_headers.insert(header::CONTENT_DISPOSITION, value);
    }
    if let Ok(value) = HeaderValue::from_str(&package.index.sha256) {
        response_headers.insert(CONTENT_SHA256, value);
    }
    Ok(response)
}

async fn list_templates() -> Json<Envelope<Vec<TemplateSummary>>> {
    ok(templates::registry().iter().map(|t| t.summary()).collect())
}

async fn list_industries() -> Json<Envelope<&'static [&'static str]>> {
    ok(INDUSTRIES)
}

async fn public_site(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let page = state.publisher.public_page(&slug, user_agent).await?;

    let etag = HeaderValue::from_str(&page.etag)
        .map_err(|e| ApiError::Internal {
            public: "Internal server error",
            detail: e.to_string(),
        })?;
    let fresh = headers
        .get(header::IF_NONE_MATCH)
        .is_some_and(|tag| *tag == etag);

    let mut response = if fresh {
        StatusCode::NOT_MODIFIED.into_response()
    } else {
        Html(page.html).into_response()
    };
    response.headers_mut().insert(header::ETAG, etag);
    Ok(response)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{FixedCopy, site_generator};

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn generate_errors_map_to_status() {
        let invalid = GenerateError::Validation {
            field: "brandName",
            message: "is required".into(),
        };
        assert_eq!(status_of(invalid.into()), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(GenerateError::UnsupportedTemplate("t9".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(GenerateError::Persist(crate::store::StoreError::LockPoisoned).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn auth_and_lookup_errors_map_to_status() {
        assert_eq!(status_of(AuthError::MissingToken.into()), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(PublishError::NotFound.into()), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_site_id_is_not_found() {
        assert!(matches!(site_id("nope"), Err(ApiError::NotFound(_))));
        assert!(site_id(&Uuid::new_v4().to_string()).is_ok());
    }

    #[test]
    fn router_builds_with_state() {
        let generator = site_generator(FixedCopy::default());
        let publisher = Publisher::new(generator.store().clone());
        let state = Arc::new(AppState {
            generator,
            publisher,
            auth: Arc::new(crate::auth::TokenAuthenticator::from_config(
                &crate::config::AuthConfig::default(),
            )),
        });
        let _router = router(state);
    }
}
