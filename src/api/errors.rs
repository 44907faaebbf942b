use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorBody;
use crate::readings::ReadingError;

/// Every service failure leaves the `/lecturas` routes as a 404 carrying
/// the error's message.
#[derive(Debug)]
pub struct AppError(pub ReadingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::NOT_FOUND;
        let body = Json(ErrorBody {
            mensaje: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<ReadingError> for AppError {
    fn from(e: ReadingError) -> Self {
        Self(e)
    }
}
