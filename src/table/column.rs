use super::builtin_transform;
use crate::Result;
use crate::document::Value;
use crate::format::{FormatterKind, UnitKind};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Computes a cell from the row object and the whole document.
///
/// An error or an empty string renders as the sentinel.
pub type Transform = fn(row: &Value, document: &Value) -> Result<String>;

/// One output column of a table.
///
/// In configuration files `transform` names one of the built-in transforms.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnSpec {
    pub label: String,

    /// Path relative to each row.
    #[serde(default)]
    pub path: String,

    #[serde(default, deserialize_with = "deserialize_transform")]
    pub transform: Option<Transform>,

    #[serde(default)]
    pub unit: Option<UnitKind>,

    #[serde(default)]
    pub formatter: Option<FormatterKind>,
}

impl ColumnSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            transform: None,
            unit: None,
            formatter: None,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    #[must_use]
    pub const fn with_unit(mut self, unit: UnitKind) -> Self {
        self.unit = Some(unit);
        self
    }

    #[must_use]
    pub const fn with_formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter = Some(formatter);
        self
    }
}

fn deserialize_transform<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Transform>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|name| builtin_transform(&name).ok_or_else(|| D::Error::custom(format!("unknown column transform '{name}'"))))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_column() {
        let column: ColumnSpec = serde_yaml::from_str("label: Date\npath: TestDate\nformatter: date").unwrap();
        assert_eq!(column.label, "Date");
        assert_eq!(column.path, "TestDate");
        assert_eq!(column.formatter, Some(FormatterKind::Date));
        assert!(column.transform.is_none());
    }

    #[test]
    fn test_deserialize_named_transform() {
        let column: ColumnSpec = serde_yaml::from_str("label: Mileage\ntransform: odometer").unwrap();
        assert!(column.transform.is_some());
        assert!(column.path.is_empty());
    }

    #[test]
    fn test_deserialize_unknown_transform_fails() {
        let result: Result<ColumnSpec, _> = serde_yaml::from_str("label: X\ntransform: teleport");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("unknown column transform 'teleport'"), "{message}");
    }
}
