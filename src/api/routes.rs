use axum::{
    routing::get,
    Router,
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse},
    Json,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::api::models::{HealthResponse, MetaQuery, MetaResponse};
use crate::api::response;
use crate::render;
use crate::site::robots::robots_txt;
use crate::AppState;

/// Paths served by fixed handlers; pages may not shadow them.
pub const RESERVED_PATHS: [&str; 4] = ["/robots.txt", "/sitemap.xml", "/health", "/api/meta"];

pub fn create_router(app_state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new()
        .route("/robots.txt", get(robots_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/health", get(health_handler))
        .route("/api/meta", get(meta_handler));

    for entry in app_state.registry.entries() {
        if RESERVED_PATHS.contains(&entry.path) {
            warn!(path = entry.path, "page shadows a reserved path, not mounted");
            continue;
        }
        debug!(path = entry.path, title = entry.descriptor.title, "mounting page");
        router = router.route(entry.path, get(page_handler));
    }

    router
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn page_handler(State(state): State<AppState>, uri: Uri) -> Result<Html<String>> {
    let entry = state
        .registry
        .lookup(uri.path())
        .ok_or_else(|| AppError::NotFound(uri.path().to_string()))?;

    debug!(path = entry.path, "rendering page");
    Ok(Html(render::document(entry)))
}

async fn robots_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], robots_txt())
}

async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render::sitemap_xml(&state.registry),
    )
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        addr: state.config.server_addr.to_string(),
        routes: state.registry.len(),
    })
}

async fn meta_handler(
    State(state): State<AppState>,
    Query(query): Query<MetaQuery>,
) -> impl IntoResponse {
    match state.registry.lookup(&query.path) {
        Some(entry) => response::success(MetaResponse::new(entry.path, entry.descriptor)),
        None => {
            debug!(path = %query.path, "metadata requested for unknown route");
            response::error(StatusCode::NOT_FOUND, format!("No page registered at {}", query.path))
        }
    }
}

async fn not_found_handler(uri: Uri) -> AppError {
    debug!(path = %uri.path(), "no route matched");
    AppError::NotFound(uri.path().to_string())
}
