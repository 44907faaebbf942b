//! Mapping between the stored [`Reading`] and the wire [`ReadingDto`].

use chrono::{DateTime, Local, TimeZone, Utc};

use super::dto::ReadingDto;
use crate::db::models::{Reading, ReadingDraft};

/// `dd/MM/yyyy HH:mm:ss`
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Format a stored timestamp for display in `tz`.
pub fn format_recorded_at<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format(DATE_FORMAT).to_string()
}

/// Outbound conversion using the server's local time zone.
pub fn to_dto(reading: &Reading) -> ReadingDto {
    to_dto_in(reading, &Local)
}

pub fn to_dto_in<Tz>(reading: &Reading, tz: &Tz) -> ReadingDto
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    ReadingDto {
        kind: reading.kind.clone(),
        value: reading.value,
        date: Some(format_recorded_at(reading.recorded_at, tz)),
    }
}

/// Inbound conversion. Any caller-supplied `fecha` is dropped; the id and
/// timestamp are assigned later.
pub fn to_draft(dto: &ReadingDto) -> ReadingDraft {
    ReadingDraft {
        kind: dto.kind.clone(),
        value: dto.value,
    }
}
