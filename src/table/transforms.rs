//! Built-in column transforms that configuration files can refer to by name.

use super::Transform;
use crate::Result;
use crate::document::Value;
use crate::format::{DEFAULT_PRECISION, coerce_number, format_number, is_empty};
use ohno::app_err;

const BUILTIN_TRANSFORMS: &[(&str, Transform)] = &[("odometer", odometer), ("item_count", item_count)];

/// Lists whose length `item_count` reports, in lookup order.
const COUNTED_LISTS: &[&str] = &["AnnotationList", "DefectList", "AdvisoryNoticeList"];

/// Look up a built-in transform by name.
#[must_use]
pub fn builtin_transform(name: &str) -> Option<Transform> {
    BUILTIN_TRANSFORMS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, transform)| *transform)
}

/// Names of all built-in transforms.
pub fn builtin_transform_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_TRANSFORMS.iter().map(|(name, _)| *name)
}

/// `OdometerReading` with the unit given by `OdometerUnit` (`mi` or `km`, miles when absent).
fn odometer(row: &Value, _document: &Value) -> Result<String> {
    let reading = row.get("OdometerReading");
    if is_empty(reading) {
        return Ok(String::new());
    }

    let reading = reading
        .and_then(coerce_number)
        .ok_or_else(|| app_err!("odometer reading is not a number"))?;

    let unit = match row.get("OdometerUnit").and_then(Value::as_str).map(str::to_ascii_lowercase).as_deref() {
        Some("km" | "kilometres" | "kilometers") => "km",
        None | Some("mi" | "miles" | "") => "miles",
        Some(other) => return Err(app_err!("unrecognized odometer unit '{other}'")),
    };

    Ok(format!("{} {unit}", format_number(reading, DEFAULT_PRECISION)))
}

/// Number of entries in the first of the row's annotation lists that is present.
fn item_count(row: &Value, _document: &Value) -> Result<String> {
    Ok(COUNTED_LISTS
        .iter()
        .find_map(|name| row.get(name).and_then(Value::as_sequence))
        .map(|items| items.len().to_string())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> Value {
        Value::from(value)
    }

    #[test]
    fn test_lookup() {
        assert!(builtin_transform("odometer").is_some());
        assert!(builtin_transform("item_count").is_some());
        assert!(builtin_transform("nope").is_none());
        assert_eq!(builtin_transform_names().collect::<Vec<_>>(), ["odometer", "item_count"]);
    }

    #[test]
    fn test_odometer() {
        let document = Value::Null;
        assert_eq!(odometer(&row(json!({"OdometerReading": 45210, "OdometerUnit": "mi"})), &document).unwrap(), "45,210 miles");
        assert_eq!(odometer(&row(json!({"OdometerReading": "1200", "OdometerUnit": "KM"})), &document).unwrap(), "1,200 km");
        assert_eq!(odometer(&row(json!({"OdometerReading": 10})), &document).unwrap(), "10 miles");
        assert_eq!(odometer(&row(json!({})), &document).unwrap(), "");
    }

    #[test]
    fn test_odometer_errors() {
        let document = Value::Null;
        assert!(odometer(&row(json!({"OdometerReading": "unreadable"})), &document).is_err());
        assert!(odometer(&row(json!({"OdometerReading": 5, "OdometerUnit": "furlongs"})), &document).is_err());
    }

    #[test]
    fn test_item_count() {
        let document = Value::Null;
        assert_eq!(item_count(&row(json!({"AnnotationList": [{}, {}]})), &document).unwrap(), "2");
        assert_eq!(item_count(&row(json!({"DefectList": []})), &document).unwrap(), "0");
        assert_eq!(item_count(&row(json!({})), &document).unwrap(), "");
    }
}
