use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use super::{conversion, dto::ReadingDto, ReadingError};
use crate::store::ReadingStore;

/// Register and list readings on top of a [`ReadingStore`].
#[derive(Clone)]
pub struct ReadingService {
    store: Arc<dyn ReadingStore>,
}

impl ReadingService {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    /// Stamps the reading with the current time and persists it.
    ///
    /// Returns the inbound DTO untouched: neither the id nor the assigned
    /// timestamp is reflected back to the caller.
    pub async fn register(&self, dto: ReadingDto) -> Result<ReadingDto, ReadingError> {
        let reading = conversion::to_draft(&dto).recorded_at(Utc::now());

        match self.store.insert_one(reading).await {
            Ok(stored) => {
                info!(id = %stored.id, tipo = %stored.kind, valor = stored.value, "Lectura registered");
                Ok(dto)
            }
            Err(e) => {
                error!(tipo = %dto.kind, error = %e, "Failed to register lectura");
                Err(ReadingError::Registration(e))
            }
        }
    }

    /// All stored readings as DTOs. An empty store is reported as
    /// [`ReadingError::NotFound`], not as an empty list.
    pub async fn list_all(&self) -> Result<Vec<ReadingDto>, ReadingError> {
        let readings = self.store.find_all().await.map_err(|e| {
            error!(error = %e, "Failed to fetch lecturas");
            ReadingError::Listing(e)
        })?;

        if readings.is_empty() {
            warn!("No lecturas stored");
            return Err(ReadingError::NotFound);
        }

        info!(count = readings.len(), "Lecturas fetched");
        Ok(readings.iter().map(conversion::to_dto).collect())
    }
}
