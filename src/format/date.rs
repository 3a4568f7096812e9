use super::{LOG_TARGET, SENTINEL, is_empty};
use crate::document::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

const DATETIME_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Interpret a value as a calendar date and time.
///
/// Offsets in RFC 3339 input are honored by keeping the wall-clock time as written. Numbers are Unix
/// epoch milliseconds.
#[must_use]
pub fn parse_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::DateTime(dt) => Some(dt.naive_utc()),
        Value::Number(n) if n.is_finite() => {
            #[expect(clippy::cast_possible_truncation, reason = "sub-millisecond precision is irrelevant for display")]
            let millis = n.trunc() as i64;
            DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
        }
        Value::String(s) => parse_date_text(s.trim()),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }

    DATETIME_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_INPUT_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Render as `dd/mm/yyyy`.
#[must_use]
pub fn format_date(value: Option<&Value>) -> String {
    format_with(value, DATE_FORMAT)
}

/// Render as `dd/mm/yyyy HH:MM`.
#[must_use]
pub fn format_datetime(value: Option<&Value>) -> String {
    format_with(value, DATETIME_FORMAT)
}

fn format_with(value: Option<&Value>, format: &str) -> String {
    let Some(value) = value.filter(|v| !is_empty(Some(v))) else {
        return SENTINEL.to_string();
    };

    parse_date(value).map_or_else(
        || {
            log::debug!(target: LOG_TARGET, "unparsable date in {} value", value.kind());
            SENTINEL.to_string()
        },
        |dt| dt.format(format).to_string(),
    )
}
