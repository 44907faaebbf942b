pub mod conversion;
pub mod dto;
pub mod service;

use thiserror::Error;

use crate::store::StoreError;

pub use service::ReadingService;

/// Closed set of failures the reading operations can report.
///
/// The `Display` text is what callers see; the store cause is kept only as
/// the error source for logging.
#[derive(Debug, Error)]
pub enum ReadingError {
    #[error("No se pudo registrar la lectura.")]
    Registration(#[source] StoreError),

    #[error("No se encontró ninguna lectura.")]
    NotFound,

    #[error("No se pudieron obtener las lecturas.")]
    Listing(#[source] StoreError),
}
