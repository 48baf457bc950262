//! Protobuf JSON rendering for nested messages stored in text columns.

use chrono::{SecondsFormat, TimeZone, Utc};
use prost_types::Timestamp;
use serde::{ser::Error, Serialize, Serializer};

use crate::error::Result;

// 0001-01-01T00:00:00Z and 9999-12-31T23:59:59Z
const MIN_SECONDS: i64 = -62_135_596_800;
const MAX_SECONDS: i64 = 253_402_300_799;

/// Renders a timestamp as RFC 3339 in UTC, with 0, 3, 6 or 9 fractional digits.
pub fn format_timestamp(ts: &Timestamp) -> std::result::Result<String, String> {
    if ts.seconds < MIN_SECONDS || ts.seconds > MAX_SECONDS {
        return Err(format!("timestamp seconds {} out of range", ts.seconds));
    }
    if !(0..1_000_000_000).contains(&ts.nanos) {
        return Err(format!("timestamp nanos {} out of range", ts.nanos));
    }
    Utc.timestamp_opt(ts.seconds, ts.nanos as u32)
        .single()
        .map(|t| t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        .ok_or_else(|| format!("invalid timestamp {}.{}", ts.seconds, ts.nanos))
}

struct Rfc3339<'a>(&'a Timestamp);

impl Serialize for Rfc3339<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let text = format_timestamp(self.0).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

pub fn optional_timestamp<S: Serializer>(
    value: &Option<Timestamp>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(ts) => Rfc3339(ts).serialize(serializer),
        None => serializer.serialize_none(),
    }
}

pub fn timestamps<S: Serializer>(
    values: &[Timestamp],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(Rfc3339))
}

/// Pretty-printed JSON of a message, 2-space indented. An absent message renders
/// as its default value, which is `{}` when every field is skipped.
pub fn message_to_json<M: Serialize + Default>(message: Option<&M>) -> Result<String> {
    let json = match message {
        Some(m) => serde_json::to_string_pretty(m)?,
        None => serde_json::to_string_pretty(&M::default())?,
    };
    Ok(json)
}
