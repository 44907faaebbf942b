use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BoxFuture, ReadingStore};
use crate::db::models::{NewReading, Reading};

/// Process-local, append-only `ReadingStore`.
///
/// Wrapped in `Arc` so it can be cheaply cloned and shared across tasks.
/// Contents are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryReadingStore {
    inner: Arc<RwLock<Vec<Reading>>>,
}

impl MemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl ReadingStore for MemoryReadingStore {
    fn insert_one(&self, reading: NewReading) -> BoxFuture<'_, Reading> {
        Box::pin(async move {
            let stored = reading.with_id(Uuid::new_v4());
            self.inner.write().await.push(stored.clone());
            Ok(stored)
        })
    }

    fn find_all(&self) -> BoxFuture<'_, Vec<Reading>> {
        Box::pin(async move { Ok(self.inner.read().await.clone()) })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::db::models::ReadingDraft;

    fn new_reading(kind: &str, value: f32) -> NewReading {
        ReadingDraft {
            kind: kind.to_owned(),
            value,
        }
        .recorded_at(Utc::now())
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = MemoryReadingStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = MemoryReadingStore::new();
        let a = store.insert_one(new_reading("temperatura", 1.0)).await.unwrap();
        let b = store.insert_one(new_reading("temperatura", 1.0)).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_nil());
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let store = MemoryReadingStore::new();
        store.insert_one(new_reading("temperatura", 20.0)).await.unwrap();
        store.insert_one(new_reading("humedad", 55.0)).await.unwrap();
        store.insert_one(new_reading("luz", 300.0)).await.unwrap();

        let kinds: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.kind)
            .collect();
        assert_eq!(kinds, ["temperatura", "humedad", "luz"]);
    }

    #[tokio::test]
    async fn clones_share_contents() {
        let store = MemoryReadingStore::new();
        let other = store.clone();
        store.insert_one(new_reading("temperatura", 20.0)).await.unwrap();
        assert_eq!(other.len().await, 1);
    }
}
