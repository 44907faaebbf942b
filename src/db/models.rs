use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the `lecturas` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Reading {
    /// Assigned by the store on insert.
    pub id: Uuid,
    /// Free-text sensor classification, e.g. `"temperatura"`.
    #[sqlx(rename = "tipo")]
    pub kind: String,
    #[sqlx(rename = "valor")]
    pub value: f32,
    /// Set by the service at registration, never by the caller.
    #[sqlx(rename = "fecha")]
    pub recorded_at: DateTime<Utc>,
}

/// A reading ready to be inserted: everything except the store-assigned id.
///
/// Only obtainable through [`ReadingDraft::recorded_at`], so the timestamp
/// always comes from the registering service.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    pub kind: String,
    pub value: f32,
    pub recorded_at: DateTime<Utc>,
}

/// Caller-supplied part of a reading, before a timestamp is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingDraft {
    pub kind: String,
    pub value: f32,
}

impl ReadingDraft {
    pub fn recorded_at(self, at: DateTime<Utc>) -> NewReading {
        NewReading {
            kind: self.kind,
            value: self.value,
            recorded_at: at,
        }
    }
}

impl NewReading {
    /// Attach a store-assigned identifier.
    pub fn with_id(self, id: Uuid) -> Reading {
        Reading {
            id,
            kind: self.kind,
            value: self.value,
            recorded_at: self.recorded_at,
        }
    }
}
