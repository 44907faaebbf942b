pub mod dto;
pub mod errors;
pub mod handlers;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::readings::ReadingService;
use handlers::ApiDoc;

/// CORS policy for everything under `/lecturas`.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

pub fn router(service: ReadingService) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .route("/lecturas/registrar", post(handlers::register_reading))
        .route("/lecturas", get(handlers::list_readings))
        .route("/lecturas/", get(handlers::list_readings))
        .with_state(service)
        .split_for_parts();

    // Only the routes registered so far get the CORS policy.
    router
        .layer(cors_layer())
        .route("/health", get(handlers::health))
        .route(
            "/api-docs/openapi.json",
            get(move || async move { axum::Json(api) }),
        )
        .layer(TraceLayer::new_for_http())
}
