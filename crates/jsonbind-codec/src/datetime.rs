//! Datetime codec: permissive ISO-8601 decode, canonical RFC 3339 encode.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::error::DecodeError;
use crate::scalar::json_kind;

/// Decode an ISO-8601 timestamp from a JSON string.
///
/// Accepted forms: full date-time with offset (`2023-01-01T00:00:00Z`,
/// `2023-01-01T05:30:00+05:30`), offset-less date-time (assumed UTC, `T` or
/// space separated), and date-only (midnight UTC).
pub fn decode_datetime(v: &Value) -> Result<DateTime<FixedOffset>, DecodeError> {
    let Value::String(s) = v else {
        return Err(DecodeError::TypeMismatch {
            expected: "datetime string",
            found: json_kind(v),
        });
    };
    parse_iso8601(s).ok_or_else(|| DecodeError::InvalidTimestamp(s.clone()))
}

/// Encode a timestamp as RFC 3339 with explicit offset.
///
/// Not guaranteed byte-identical to the decoded input (`Z` becomes `+00:00`,
/// fractional seconds are emitted only when present), only value-identical.
pub fn encode_datetime(dt: &DateTime<FixedOffset>) -> Value {
    Value::String(dt.to_rfc3339())
}

fn parse_iso8601(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
    }
    None
}
