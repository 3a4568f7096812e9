//! Unit and formatter library
//!
//! Pure functions turning a raw document value plus a declared [`UnitKind`] or [`FormatterKind`] into
//! display text. Any value that is absent, `null`, empty, or unusable for the requested rendering becomes
//! [`SENTINEL`]; nothing in this module fails or panics on bad input.
//!
//! # Empty values
//!
//! A value is empty when it is missing, `null`, the empty string, or the string `null` in any letter
//! case. The upstream provider sends all of these for "no data", so every formatter treats them the same.
//!
//! # Numbers
//!
//! Numeric rendering follows en-GB conventions: thousands separated by commas, at most three fraction
//! digits with trailing zeros dropped, except for units that always show one decimal place. Strings are
//! coerced by stripping everything but digits, `.` and `-` (so `£1,234` reads as `1234`).

mod date;
mod formatter;
mod number;
mod unit;

pub use date::{format_date, format_datetime, parse_date};
pub use formatter::{FormatterKind, apply_formatter};
pub use number::{DEFAULT_PRECISION, Precision, coerce_number, format_currency, format_number};
pub use unit::{UnitKind, format_with_unit};

use crate::document::Value;

const LOG_TARGET: &str = "    format";

/// Display text standing for "no data".
pub const SENTINEL: &str = "N/A";

/// Whether a value counts as "no data".
#[must_use]
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty() || s.eq_ignore_ascii_case("null"),
        Some(_) => false,
    }
}

/// Plain text rendering of a value, or `None` when it has no sensible text form.
///
/// Mappings never have a text form. Sequences of scalars render as their comma-joined elements, skipping
/// empty ones; a sequence holding any container has no text form.
#[must_use]
pub fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => (!is_empty(Some(value))).then(|| s.to_string()),
        Value::DateTime(dt) => Some(dt.to_rfc3339()),
        Value::Sequence(items) => {
            let mut result = String::new();
            for item in items {
                if item.is_container() {
                    return None;
                }
                let Some(text) = display_text(item) else {
                    continue;
                };
                if !result.is_empty() {
                    result.push_str(", ");
                }
                result.push_str(&text);
            }
            (!result.is_empty()).then_some(result)
        }
        Value::Mapping(_) => None,
    }
}

/// Render with an optional formatter and optional unit.
///
/// The formatter governs when present; a unit declared alongside it is appended to the formatter's output
/// unless that output is the sentinel. With only a unit, [`format_with_unit`] applies. With neither, the
/// value's plain text is used.
#[must_use]
pub fn format_value(value: Option<&Value>, formatter: Option<FormatterKind>, unit: Option<UnitKind>) -> String {
    match (formatter, unit) {
        (Some(formatter), unit) => {
            let formatted = apply_formatter(value, formatter);
            match unit {
                Some(unit) if formatted != SENTINEL => format!("{formatted} {}", unit.suffix()).trim().to_string(),
                _ => formatted,
            }
        }
        (None, Some(unit)) => format_with_unit(value, unit),
        (None, None) => value
            .filter(|v| !is_empty(Some(v)))
            .and_then(display_text)
            .unwrap_or_else(|| SENTINEL.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(None));
        assert!(is_empty(Some(&Value::Null)));
        assert!(is_empty(Some(&Value::from(""))));
        assert!(is_empty(Some(&Value::from("null"))));
        assert!(is_empty(Some(&Value::from("NULL"))));
        assert!(is_empty(Some(&Value::from("Null"))));
        assert!(!is_empty(Some(&Value::from(" "))));
        assert!(!is_empty(Some(&Value::from(0.0))));
        assert!(!is_empty(Some(&Value::from(false))));
    }

    #[test]
    fn test_display_text_scalars() {
        assert_eq!(display_text(&Value::from(5.0)).as_deref(), Some("5"));
        assert_eq!(display_text(&Value::from(1.25)).as_deref(), Some("1.25"));
        assert_eq!(display_text(&Value::from(true)).as_deref(), Some("true"));
        assert_eq!(display_text(&Value::from("Petrol")).as_deref(), Some("Petrol"));
        assert_eq!(display_text(&Value::Null), None);
    }

    #[test]
    fn test_display_text_containers() {
        assert_eq!(
            display_text(&Value::from(json!(["ABS", "ESP"]))).as_deref(),
            Some("ABS, ESP")
        );
        assert_eq!(display_text(&Value::from(json!([]))), None);
        assert_eq!(
            display_text(&Value::from(json!(["ABS", null, "", "ESP"]))).as_deref(),
            Some("ABS, ESP")
        );
        assert_eq!(display_text(&Value::from(json!([null, "NULL"]))), None);
        assert_eq!(display_text(&Value::from(json!([{"a": 1}]))), None);
        assert_eq!(display_text(&Value::from(json!({"a": 1}))), None);
    }

    #[test]
    fn test_format_value_plain() {
        assert_eq!(format_value(Some(&Value::from("Blue")), None, None), "Blue");
        assert_eq!(format_value(Some(&Value::from("null")), None, None), SENTINEL);
        assert_eq!(format_value(None, None, None), SENTINEL);
    }

    #[test]
    fn test_format_value_formatter_with_unit() {
        assert_eq!(
            format_value(Some(&Value::from("12.5")), Some(FormatterKind::Currency), Some(UnitKind::Days)),
            "£12.50 days"
        );
        assert_eq!(
            format_value(Some(&Value::from("abc")), Some(FormatterKind::Currency), Some(UnitKind::Days)),
            SENTINEL
        );
    }

    #[test]
    fn test_format_value_list_with_formatter() {
        let list = Value::from(json!(["ab", "cd"]));
        assert_eq!(format_value(Some(&list), None, None), "ab, cd");
        assert_eq!(format_value(Some(&list), Some(FormatterKind::Uppercase), None), SENTINEL);
    }

    #[test]
    fn test_format_value_unit_only() {
        assert_eq!(format_value(Some(&Value::from(1200.0)), None, Some(UnitKind::Cc)), "1,200 cc");
    }
}
