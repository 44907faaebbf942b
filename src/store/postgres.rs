use sqlx::PgPool;
use tracing::debug;

use super::{BoxFuture, ReadingStore};
use crate::db::models::{NewReading, Reading};

/// `ReadingStore` over the `lecturas` table.
#[derive(Debug, Clone)]
pub struct PgReadingStore {
    pool: PgPool,
}

impl PgReadingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ReadingStore for PgReadingStore {
    fn insert_one(&self, reading: NewReading) -> BoxFuture<'_, Reading> {
        Box::pin(async move {
            let row = sqlx::query_as::<_, Reading>(
                r#"
                INSERT INTO lecturas (tipo, valor, fecha)
                VALUES ($1, $2, $3)
                RETURNING id, tipo, valor, fecha
                "#,
            )
            .bind(&reading.kind)
            .bind(reading.value)
            .bind(reading.recorded_at)
            .fetch_one(&self.pool)
            .await?;

            debug!(id = %row.id, "lectura inserted");
            Ok(row)
        })
    }

    fn find_all(&self) -> BoxFuture<'_, Vec<Reading>> {
        Box::pin(async move {
            let rows = sqlx::query_as::<_, Reading>(
                r#"
                SELECT id, tipo, valor, fecha
                FROM lecturas
                ORDER BY fecha ASC
                "#,
            )
            .fetch_all(&self.pool)
            .await?;

            Ok(rows)
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use sqlx::PgPool;

    use super::*;
    use crate::db::models::ReadingDraft;

    fn draft(kind: &str, value: f32) -> ReadingDraft {
        ReadingDraft {
            kind: kind.to_owned(),
            value,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn insert_assigns_id_and_keeps_fields(pool: PgPool) {
        let store = PgReadingStore::new(pool);
        let at = Utc::now();

        let row = store
            .insert_one(draft("temperatura", 23.5).recorded_at(at))
            .await
            .unwrap();

        assert!(!row.id.is_nil());
        assert_eq!(row.kind, "temperatura");
        assert_eq!(row.value, 23.5);
        // TIMESTAMPTZ keeps microseconds
        assert_eq!(row.recorded_at.timestamp_micros(), at.timestamp_micros());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn find_all_empty_table(pool: PgPool) {
        let store = PgReadingStore::new(pool);
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn find_all_returns_rows_in_registration_order(pool: PgPool) {
        let store = PgReadingStore::new(pool);
        let t0 = Utc::now();

        let first = store
            .insert_one(draft("temperatura", 20.0).recorded_at(t0))
            .await
            .unwrap();
        let second = store
            .insert_one(draft("humedad", 61.25).recorded_at(t0 + Duration::seconds(1)))
            .await
            .unwrap();

        let rows = store.find_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, first.id);
        assert_eq!(rows[1].id, second.id);
        assert_eq!(rows[1].kind, "humedad");
        assert_eq!(rows[1].value, 61.25);
    }
}
