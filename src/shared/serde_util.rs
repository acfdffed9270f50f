//! Custom serde helpers for Lemmy wire formats.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Timestamp with fractional seconds, e.g. `2023-07-04T02:11:43.086`.
pub const FRACTIONAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Timestamp without fractional seconds, e.g. `2023-07-04T02:11:43`.
pub const WHOLE_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Output format: always millisecond precision.
const SERIALIZE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Parse a Lemmy timestamp (naive, interpreted as UTC).
///
/// Strings containing a `.` are parsed with fractional seconds, all others
/// with whole seconds. The error names the offending string.
pub fn parse_lemmy_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let format = if raw.contains('.') {
        FRACTIONAL_FORMAT
    } else {
        WHOLE_SECONDS_FORMAT
    };
    NaiveDateTime::parse_from_str(raw, format)
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("Invalid date string {raw:?}: {e}"))
}

/// `#[serde(with = "lemmy_date")]` for `DateTime<Utc>` fields.
pub mod lemmy_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_lemmy_date(&raw).map_err(serde::de::Error::custom)
    }

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(super::SERIALIZE_FORMAT).to_string())
    }

    /// `#[serde(default, with = "lemmy_date::option")]` for `Option<DateTime<Utc>>`.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::super::parse_lemmy_date(&raw)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }

        pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match date {
                Some(d) => super::serialize(d, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}
