//! Field readers for stored records.
//!
//! Records may have been written by other tools or edited by hand, so a field holding `null` or
//! the wrong JSON type falls back to its default instead of failing the whole collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::repository::entities::{HorseId, Sex};

/// Strings as-is, numbers and booleans as their JSON text, anything else empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null | Value::Array(_) | Value::Object(_)) | None => String::new(),
    })
}

pub fn id<'de, D>(deserializer: D) -> Result<HorseId, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer).map(HorseId::new)
}

/// Missing or blank sex reads as the default.
pub fn sex<'de, D>(deserializer: D) -> Result<Sex, D::Error>
where
    D: Deserializer<'de>,
{
    let sex = text(deserializer)?;
    Ok(if sex.is_empty() {
        Sex::default()
    } else {
        Sex::from(sex)
    })
}

/// Unreadable timestamps are dropped.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|value| serde_json::from_value(value).ok()))
}
