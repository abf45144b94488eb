//! Small helpers shared by the models and the server

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Trim a user-typed guest name; `None` when nothing is left.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Deserialize `null` (or a missing field, with `#[serde(default)]`) as `T::default()`.
///
/// The upstream occasionally sends `"tables": null` or `"menu": null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordering hint that tolerates floats and numeric strings; anything
/// else reads as absent instead of failing the table.
pub fn lenient_index<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let index = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.round() as i64),
        _ => None,
    };
    Ok(index)
}

/// Timestamps from the upstream arrive either as RFC 3339 strings or as
/// Unix milliseconds. Both are accepted; RFC 3339 is written back.
pub mod flexible_timestamp {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(DateTime<Utc>),
    }

    fn from_raw<E: serde::de::Error>(raw: Raw) -> Result<DateTime<Utc>, E> {
        match raw {
            Raw::Text(dt) => Ok(dt),
            Raw::Millis(ms) => Utc
                .timestamp_millis_opt(ms)
                .single()
                .ok_or_else(|| E::custom(format!("timestamp out of range: {ms}"))),
        }
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        from_raw(Raw::deserialize(deserializer)?)
    }

    /// `Option<DateTime<Utc>>` flavour, for `arrivedAt` on a guest
    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<Raw>::deserialize(deserializer)? {
                Some(raw) => from_raw(raw).map(Some),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "flexible_timestamp")]
        at: DateTime<Utc>,
        #[serde(default, with = "flexible_timestamp::option")]
        maybe: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Alex "), Some("Alex".to_string()));
        assert_eq!(normalize_name("   "), None);
        assert_eq!(normalize_name(""), None);
    }

    #[test]
    fn test_timestamp_accepts_rfc3339_and_millis() {
        let a: Stamped = serde_json::from_str(r#"{"at":"2026-06-01T18:30:00Z"}"#).unwrap();
        let b: Stamped = serde_json::from_str(r#"{"at":1780338600000}"#).unwrap();
        assert_eq!(a.at, b.at);
        assert!(a.maybe.is_none());
    }

    #[test]
    fn test_optional_timestamp_null() {
        let s: Stamped =
            serde_json::from_str(r#"{"at":"2026-06-01T18:30:00Z","maybe":null}"#).unwrap();
        assert!(s.maybe.is_none());

        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"at\":\"2026-06-01T18:30:00+00:00\""));
    }
}
