use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user-submitted text entry. Immutable once created; there are
/// no edit or delete operations, only add and full reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub text: String,
    #[serde(rename = "createdDate", with = "timestamp")]
    pub created_date: DateTime<Utc>,
}

impl Item {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            created_date: Utc::now(),
        }
    }

    /// Construct an item with an explicit timestamp. Used by tests and by
    /// anything replaying items from an external source.
    pub fn with_created_date(text: impl Into<String>, created_date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            created_date,
        }
    }
}

/// Timestamp codec for the persisted envelope.
///
/// Serializes as an RFC 3339 string. Deserialization is tolerant: older
/// envelopes stored epoch milliseconds (as a number or a string), and a
/// value that parses as neither falls back to the Unix epoch so one bad
/// timestamp cannot fail the whole load.
mod timestamp {
    use super::*;
    use serde::{Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Raw::deserialize(deserializer)?;
        Ok(match raw {
            Raw::Millis(ms) => from_millis(ms),
            Raw::Text(s) => parse_text(&s),
        })
    }

    fn from_millis(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap_or(DateTime::UNIX_EPOCH)
    }

    fn parse_text(s: &str) -> DateTime<Utc> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
            return parsed.with_timezone(&Utc);
        }
        if let Ok(ms) = s.parse::<i64>() {
            return from_millis(ms);
        }
        tracing::warn!(value = %s, "unparseable createdDate, falling back to epoch");
        DateTime::UNIX_EPOCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_trims_nothing() {
        let item = Item::new("  spaced  ".to_string());
        assert_eq!(item.text, "  spaced  ");
    }

    #[test]
    fn test_created_date_round_trip() {
        let item = Item::new("milk".to_string());
        let json = serde_json::to_string(&item).unwrap();
        let loaded: Item = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.id, item.id);
        assert_eq!(loaded.text, item.text);
        // RFC 3339 with millisecond precision
        assert_eq!(
            loaded.created_date.timestamp_millis(),
            item.created_date.timestamp_millis()
        );
    }

    #[test]
    fn test_deserialize_epoch_millis_string() {
        let json = r#"{"id":"a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8","text":"x","createdDate":"1700000000000"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.created_date.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_deserialize_epoch_millis_number() {
        let json = r#"{"id":"a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8","text":"x","createdDate":1700000000000}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.created_date.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_deserialize_garbage_falls_back_to_epoch() {
        let json = r#"{"id":"a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8","text":"x","createdDate":"not a date"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.created_date, DateTime::UNIX_EPOCH);
        assert_eq!(item.text, "x");
    }
}
