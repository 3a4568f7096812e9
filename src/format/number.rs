use crate::document::Value;

const CURRENCY_SYMBOL: char = '£';

/// How many fraction digits a formatted number carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Exactly this many digits, zero-padded.
    Fixed(usize),
    /// Up to this many digits, trailing zeros dropped.
    Max(usize),
}

/// Default precision for locale-formatted numbers.
pub const DEFAULT_PRECISION: Precision = Precision::Max(3);

/// Interpret a value as a finite number.
///
/// Strings that do not parse as-is are stripped of everything except ASCII digits, `.` and `-` and parsed
/// again, so `"£1,234.50"` yields `1234.5` while `"5.0mph-ish"` (stripped to `"5.0-"`) yields nothing.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.is_finite().then_some(*n),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(n) = trimmed.parse::<f64>()
                && n.is_finite()
            {
                return Some(n);
            }

            let stripped: String = trimmed.chars().filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-').collect();
            stripped.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

/// Format a number with thousands separators.
#[must_use]
pub fn format_number(n: f64, precision: Precision) -> String {
    let magnitude = match precision {
        Precision::Fixed(digits) => format!("{:.digits$}", n.abs()),
        Precision::Max(digits) => {
            let text = format!("{:.digits$}", n.abs());
            if text.contains('.') {
                text.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                text
            }
        }
    };

    let (int_part, frac_part) = magnitude.split_once('.').map_or((magnitude.as_str(), None), |(i, f)| (i, Some(f)));

    let mut result = String::with_capacity(magnitude.len() + magnitude.len() / 3 + 1);

    // A value that rounds to zero never shows a sign
    if n < 0.0 && magnitude.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.push('-');
    }

    result.push_str(&group_thousands(int_part));

    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }

    result
}

/// Format a number as pounds sterling with two decimals.
#[must_use]
pub fn format_currency(n: f64) -> String {
    let formatted = format_number(n, Precision::Fixed(2));
    formatted
        .strip_prefix('-')
        .map_or_else(|| format!("{CURRENCY_SYMBOL}{formatted}"), |rest| format!("-{CURRENCY_SYMBOL}{rest}"))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
