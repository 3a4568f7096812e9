use super::date::{format_date, format_datetime};
use super::number::{coerce_number, format_currency};
use super::{LOG_TARGET, SENTINEL, display_text, is_empty};
use crate::document::Value;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Named rule controlling how a raw value becomes display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormatterKind {
    /// `dd/mm/yyyy`
    Date,
    /// `dd/mm/yyyy HH:MM`
    Datetime,
    /// `£1,234.50`
    Currency,
    /// `Yes` / `No`
    Boolean,
    /// Upper-cased text
    Uppercase,
}

/// Apply a formatter to a value.
#[must_use]
pub fn apply_formatter(value: Option<&Value>, formatter: FormatterKind) -> String {
    let Some(value) = value.filter(|v| !is_empty(Some(v))) else {
        return SENTINEL.to_string();
    };

    let formatted = match formatter {
        FormatterKind::Date => return format_date(Some(value)),
        FormatterKind::Datetime => return format_datetime(Some(value)),
        FormatterKind::Currency => coerce_number(value).map(format_currency),
        FormatterKind::Boolean => yes_no(value).map(ToString::to_string),
        FormatterKind::Uppercase if value.is_container() => None,
        FormatterKind::Uppercase => display_text(value).map(|text| text.to_uppercase()),
    };

    formatted.unwrap_or_else(|| {
        log::debug!(target: LOG_TARGET, "formatter '{formatter}' cannot render a {} value", value.kind());
        SENTINEL.to_string()
    })
}

fn yes_no(value: &Value) -> Option<&'static str> {
    let truth = match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) if *n == 1.0 => Some(true),
        Value::Number(n) if *n == 0.0 => Some(false),
        Value::String(s) => match s.as_str() {
            "true" | "True" | "1" => Some(true),
            "false" | "False" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };

    truth.map(|b| if b { "Yes" } else { "No" })
}
