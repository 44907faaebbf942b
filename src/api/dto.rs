use serde::Serialize;
use utoipa::ToSchema;

pub use crate::readings::dto::ReadingDto;

/// Body of every failed `/lecturas` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "No se encontró ninguna lectura.")]
    pub mensaje: String,
}
