//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use pixgate_core::constants::{DEFAULT_ALLOWED_ORIGIN, MAX_IMAGE_SIZE_BYTES};
use pixgate_core::Config;
use pixgate_infra::{request_id_middleware, REQUEST_ID_HEADER};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = Router::new()
        .route(
            "/images",
            post(handlers::image_upload::upload_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE_BYTES)),
        )
        .route(
            "/images/presigned-url",
            get(handlers::presigned_upload::generate_presigned_url),
        )
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .layer(ConcurrencyLimitLayer::new(config.http_concurrency_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state);

    Ok(app)
}

/// CORS layer that stamps `Access-Control-Allow-Origin` on every response,
/// with or without an `Origin` request header.
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let allow_origin = if config.allowed_origin == DEFAULT_ALLOWED_ORIGIN {
        if config.is_production() {
            tracing::warn!("CORS configured to allow all origins - not recommended for production");
        }
        AllowOrigin::from(Any)
    } else {
        let origin: HeaderValue = config.allowed_origin.parse().map_err(|e| {
            anyhow::anyhow!("Invalid allowed origin {}: {}", config.allowed_origin, e)
        })?;
        AllowOrigin::exact(origin)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]))
}
