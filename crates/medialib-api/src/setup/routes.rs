//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::handlers::{self, health};
use crate::middleware::{get_request_id, request_id_middleware};
use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Json, Router,
};
use medialib_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

/// Limit for JSON request bodies on the media routes.
const JSON_BODY_LIMIT: usize = 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let media_routes = Router::new()
        .route("/media", get(handlers::list::list_media))
        .route("/media/upload-url", post(handlers::upload::create_upload_url))
        .route(
            "/media/complete-upload",
            post(handlers::upload::complete_upload),
        )
        .route("/media/{id}", delete(handlers::delete::delete_media))
        .route("/media/{id}/download", get(handlers::access::download_url))
        .route("/media/{id}/preview", get(handlers::access::preview_url))
        .route(
            "/media/{id}/thumbnail",
            post(handlers::thumbnail::generate_thumbnail),
        )
        .layer(RequestBodyLimitLayer::new(JSON_BODY_LIMIT));

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check));

    let mut app = media_routes.merge(health_routes);

    if state.files.local.is_some() {
        tracing::info!(
            max_upload_bytes = config.local_max_upload_bytes,
            "Serving signed local file URLs under /files"
        );
        let file_routes = Router::new()
            .route(
                "/files/{bucket}/{*key}",
                get(handlers::local_files::get_local_file)
                    .put(handlers::local_files::put_local_file),
            )
            .layer(DefaultBodyLimit::disable());
        app = app.merge(file_routes);
    }

    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = get_request_id(request).unwrap_or_default(),
        )
    });

    let app = app
        .with_state(state)
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(cors)
        .layer(trace_layer)
        .layer(axum::middleware::from_fn(request_id_middleware));

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
