use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Wire shape of a reading, used both inbound and outbound.
///
/// On `POST /lecturas/registrar` the `fecha` field is ignored by the service
/// but echoed back verbatim. On `GET /lecturas` it carries the stored
/// timestamp formatted as `dd/MM/yyyy HH:mm:ss` in server local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReadingDto {
    #[serde(rename = "tipo")]
    #[schema(example = "temperatura")]
    pub kind: String,
    /// Must fit a finite `f32`; larger magnitudes are rejected, not stored as infinity.
    #[serde(rename = "valor", deserialize_with = "finite_f32")]
    #[schema(example = 23.5)]
    pub value: f32,
    #[serde(rename = "fecha", default)]
    #[schema(example = "05/03/2024 14:30:00")]
    pub date: Option<String>,
}

fn finite_f32<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f32::deserialize(deserializer)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::custom("valor must be a finite number within f32 range"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_missing_fecha() {
        let dto: ReadingDto =
            serde_json::from_value(json!({ "tipo": "temperatura", "valor": 23.5 })).unwrap();
        assert_eq!(dto.kind, "temperatura");
        assert_eq!(dto.value, 23.5);
        assert_eq!(dto.date, None);
    }

    #[test]
    fn rejects_valor_beyond_f32_range() {
        let err = serde_json::from_value::<ReadingDto>(json!({ "tipo": "t", "valor": 1e40 }))
            .unwrap_err();
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn accepts_f32_max() {
        let dto: ReadingDto =
            serde_json::from_value(json!({ "tipo": "t", "valor": f32::MAX as f64 })).unwrap();
        assert_eq!(dto.value, f32::MAX);
    }
}
