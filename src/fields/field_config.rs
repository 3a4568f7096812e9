use super::FieldDef;
use crate::format::{FormatterKind, UnitKind};
use serde::{Deserialize, Serialize};

/// How one field is labelled, formatted, and whether it is shown at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<FormatterKind>,

    #[serde(default, skip_serializing_if = "core::ops::Not::not")]
    pub hidden: bool,
}

impl From<&FieldDef> for FieldConfig {
    fn from(def: &FieldDef) -> Self {
        Self {
            label: def.label.map(ToString::to_string),
            unit: def.unit,
            formatter: def.formatter,
            hidden: def.hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_def() {
        let def = FieldDef::new("VehicleTaxDetails.Co2Emissions").label("CO2 Emissions").unit(UnitKind::GPerKm);
        let config = FieldConfig::from(&def);
        assert_eq!(config.label.as_deref(), Some("CO2 Emissions"));
        assert_eq!(config.unit, Some(UnitKind::GPerKm));
        assert_eq!(config.formatter, None);
        assert!(!config.hidden);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: FieldConfig = toml::from_str("formatter = \"currency\"\nhidden = true").unwrap();
        assert_eq!(config.formatter, Some(FormatterKind::Currency));
        assert!(config.hidden);
        assert!(config.label.is_none());
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let result: Result<FieldConfig, _> = toml::from_str("colour = \"red\"");
        assert!(result.is_err());
    }
}
