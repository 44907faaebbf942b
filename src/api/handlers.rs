use axum::{extract::State, Json};
use utoipa::OpenApi;

use super::{
    dto::{ErrorBody, ReadingDto},
    errors::AppError,
};
use crate::readings::ReadingService;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Register a reading. The server assigns the timestamp; the response echoes
/// the request body as received.
#[utoipa::path(
    post,
    path = "/lecturas/registrar",
    request_body = ReadingDto,
    responses(
        (status = 200, description = "Reading registered, request echoed", body = ReadingDto),
        (status = 404, description = "Reading could not be registered", body = ErrorBody),
    ),
    tag = "lecturas"
)]
pub async fn register_reading(
    State(service): State<ReadingService>,
    Json(reading): Json<ReadingDto>,
) -> Result<Json<ReadingDto>, AppError> {
    Ok(Json(service.register(reading).await?))
}

/// List every stored reading with its formatted date.
#[utoipa::path(
    get,
    path = "/lecturas",
    responses(
        (status = 200, description = "All stored readings", body = Vec<ReadingDto>),
        (status = 404, description = "No readings stored, or the store failed", body = ErrorBody),
    ),
    tag = "lecturas"
)]
pub async fn list_readings(
    State(service): State<ReadingService>,
) -> Result<Json<Vec<ReadingDto>>, AppError> {
    Ok(Json(service.list_all().await?))
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Returns `200 OK` with `{"status":"ok"}` when the server is running.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "system"
)]
pub async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(register_reading, list_readings, health),
    components(schemas(ReadingDto, ErrorBody)),
    tags(
        (name = "lecturas", description = "Sensor reading endpoints"),
        (name = "system",   description = "System endpoints"),
    ),
    info(
        title = "Lecturas API",
        version = "0.1.0",
        description = "Sensor reading ingestion and listing"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
