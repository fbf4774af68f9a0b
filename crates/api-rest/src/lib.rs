//! # API REST
//!
//! REST API exposing normalized site content.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - mapping view load outcomes onto HTTP status codes
//!
//! Every request is an independent single-shot load; nothing is cached between requests.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{HealthRes, HealthService, NavEntry, NavigationRes, ViewListRes, ViewRes};
use studio_core::{ContentService, ContentSource, SiteConfig, ViewKind, ViewState};

/// Application state shared by the REST handlers.
pub struct AppState<S> {
    service: ContentService<S>,
    navigation: Arc<Vec<NavEntry>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            navigation: Arc::clone(&self.navigation),
        }
    }
}

impl<S: ContentSource> AppState<S> {
    pub fn new(service: ContentService<S>, cfg: &SiteConfig) -> Self {
        let navigation = cfg
            .defaults()
            .navigation()
            .into_iter()
            .map(|item| NavEntry {
                label: item.label,
                target: item.target,
            })
            .collect();
        Self {
            service,
            navigation: Arc::new(navigation),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_views, get_view, navigation),
    components(schemas(HealthRes, ViewListRes, ViewRes, NavEntry, NavigationRes))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router<S: ContentSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/views", get(list_views::<S>))
        .route("/views/:name", get(get_view::<S>))
        .route("/navigation", get(navigation::<S>))
        .merge(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Does not contact the CMS.
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/views",
    responses(
        (status = 200, description = "Names of every view", body = ViewListRes)
    )
)]
async fn list_views<S: ContentSource + 'static>(
    State(state): State<AppState<S>>,
) -> Json<ViewListRes> {
    let views = state
        .service
        .catalog()
        .names()
        .into_iter()
        .map(String::from)
        .collect();
    Json(ViewListRes { views })
}

#[utoipa::path(
    get,
    path = "/views/{name}",
    params(("name" = String, Path, description = "View name, as listed by /views")),
    responses(
        (status = 200, description = "View is ready, or the CMS has nothing to show (`data` is null)", body = ViewRes),
        (status = 404, description = "Unknown view"),
        (status = 500, description = "View could not be built", body = ViewRes),
        (status = 502, description = "CMS request failed; retry is possible", body = ViewRes)
    )
)]
/// Fetch and normalize one view
///
/// # Errors
/// Returns `404 Not Found` if no view has the given name.
async fn get_view<S: ContentSource + 'static>(
    State(state): State<AppState<S>>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<ViewRes>), (StatusCode, &'static str)> {
    let Ok(kind) = ViewKind::from_name(&name) else {
        return Err((StatusCode::NOT_FOUND, "Unknown view"));
    };

    let result = state.service.load(kind).await;
    let (status, body) = match ViewState::from_result(kind, result) {
        ViewState::Ready(payload) => (StatusCode::OK, ViewRes::ready(name, payload.to_json())),
        ViewState::Empty => (StatusCode::OK, ViewRes::empty(name)),
        ViewState::Error(notice) if notice.retryable => (
            StatusCode::BAD_GATEWAY,
            ViewRes::error(name, notice.message, true),
        ),
        ViewState::Error(notice) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ViewRes::error(name, notice.message, false),
        ),
        ViewState::Idle | ViewState::Loading => {
            tracing::error!("view {kind}: load finished without a terminal state");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"));
        }
    };
    Ok((status, Json(body)))
}

#[utoipa::path(
    get,
    path = "/navigation",
    responses(
        (status = 200, description = "Navigation entries", body = NavigationRes)
    )
)]
async fn navigation<S: ContentSource + 'static>(
    State(state): State<AppState<S>>,
) -> Json<NavigationRes> {
    Json(NavigationRes {
        items: state.navigation.as_ref().clone(),
    })
}
