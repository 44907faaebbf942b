//! Persistence gateway for readings.
//!
//! The service only ever needs two operations (append one, read all), so the
//! gateway is a small object-safe trait shared as `Arc<dyn ReadingStore>`.

pub mod memory;
pub mod postgres;

use std::{future::Future, pin::Pin};

use thiserror::Error;

use crate::db::models::{NewReading, Reading};

pub use memory::MemoryReadingStore;
pub use postgres::PgReadingStore;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub trait ReadingStore: Send + Sync {
    /// Persist `reading` and return it with its store-assigned id.
    fn insert_one(&self, reading: NewReading) -> BoxFuture<'_, Reading>;

    /// Every stored reading, in registration order.
    fn find_all(&self) -> BoxFuture<'_, Vec<Reading>>;
}
