use super::field_def::{FIELD_DEFINITIONS, HIDDEN_FIELD_NAMES};
use super::{FieldConfig, humanize};
use crate::document::FieldPath;
use std::collections::{BTreeMap, HashSet};

const LOG_TARGET: &str = "  registry";

/// Read-only lookup of field configuration and suppression rules.
#[derive(Debug, Clone)]
pub struct Registry {
    fields: BTreeMap<String, FieldConfig>,
    hidden_paths: HashSet<String>,
    hidden_names: HashSet<String>,
}

impl Registry {
    /// Build the registry from the built-in field table.
    #[must_use]
    pub fn build() -> Self {
        Self::build_with(core::iter::empty(), core::iter::empty())
    }

    /// Build the registry from the built-in field table plus overrides.
    ///
    /// An override replaces the built-in entry for its path entirely. Extra hidden names are added to the
    /// built-in hidden-name list.
    #[must_use]
    pub fn build_with<'a>(
        overrides: impl IntoIterator<Item = (&'a str, &'a FieldConfig)>,
        extra_hidden_names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut fields: BTreeMap<String, FieldConfig> = FIELD_DEFINITIONS
            .iter()
            .map(|def| (def.path.to_string(), FieldConfig::from(def)))
            .collect();

        let mut override_count = 0;
        for (path, config) in overrides {
            if fields.insert(path.to_string(), config.clone()).is_some() {
                log::debug!(target: LOG_TARGET, "field '{path}' overridden by configuration");
            } else {
                log::debug!(target: LOG_TARGET, "field '{path}' added by configuration");
            }
            override_count += 1;
        }

        let hidden_paths = fields
            .iter()
            .filter(|(_, config)| config.hidden)
            .map(|(path, _)| path.clone())
            .collect();

        let hidden_names = HIDDEN_FIELD_NAMES
            .iter()
            .copied()
            .chain(extra_hidden_names)
            .map(ToString::to_string)
            .collect::<HashSet<_>>();

        log::debug!(
            target: LOG_TARGET,
            "built registry with {} fields ({override_count} from configuration) and {} hidden names",
            fields.len(),
            hidden_names.len()
        );

        Self {
            fields,
            hidden_paths,
            hidden_names,
        }
    }

    /// Configuration for a path, if registered.
    ///
    /// An exact match wins; otherwise an indexed path such as `MotHistory.RecordList[2].TestDate` falls
    /// back to the entry for its canonical form `MotHistory.RecordList.TestDate`.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&FieldConfig> {
        if let Some(config) = self.fields.get(path) {
            return Some(config);
        }

        let parsed = FieldPath::parse(path);
        if parsed.has_index() {
            self.fields.get(&parsed.canonical())
        } else {
            None
        }
    }

    /// Whether the value at this path must never be shown.
    ///
    /// True when the path (or its canonical form) is registered as hidden, or when its final segment is a
    /// hidden field name.
    #[must_use]
    pub fn is_hidden(&self, path: &str) -> bool {
        if self.hidden_paths.contains(path) {
            return true;
        }

        let parsed = FieldPath::parse(path);
        if parsed.has_index() && self.hidden_paths.contains(&parsed.canonical()) {
            return true;
        }

        self.hidden_names.contains(parsed.leaf_name())
    }

    /// Display label for a path: the registered label, else `fallback`, else the humanized leaf name.
    #[must_use]
    pub fn label_for(&self, path: &str, fallback: Option<&str>) -> String {
        self.lookup(path)
            .and_then(|config| config.label.clone())
            .or_else(|| fallback.map(ToString::to_string))
            .unwrap_or_else(|| humanize(FieldPath::parse(path).leaf_name()))
    }

    /// All registered entries, ordered by path.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FieldConfig)> {
        self.fields.iter().map(|(path, config)| (path.as_str(), config))
    }

    /// Hidden field names, sorted.
    #[must_use]
    pub fn hidden_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.hidden_names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{FormatterKind, UnitKind};

    #[test]
    fn test_lookup_builtin_examples() {
        let registry = Registry::build();

        let vrm = registry.lookup("VehicleDetails.VehicleIdentification.Vrm").unwrap();
        assert_eq!(vrm.formatter, Some(FormatterKind::Uppercase));

        let co2 = registry.lookup("VehicleTaxDetails.Co2Emissions").unwrap();
        assert_eq!(co2.unit, Some(UnitKind::GPerKm));

        let zero_to_sixty = registry.lookup("ModelDetails.Performance.Statistics.ZeroToSixtyMph").unwrap();
        assert_eq!(zero_to_sixty.unit, Some(UnitKind::Seconds));
    }

    #[test]
    fn test_lookup_unregistered_is_none() {
        let registry = Registry::build();
        assert!(registry.lookup("Some.Unknown.Path").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_lookup_indexed_path_uses_canonical_entry() {
        let registry = Registry::build();
        let config = registry.lookup("MotHistory.RecordList[3].OdometerReading").unwrap();
        assert_eq!(config.unit, Some(UnitKind::Miles));
    }

    #[test]
    fn test_is_hidden_by_path() {
        let registry = Registry::build();
        assert!(registry.is_hidden("VehicleDetails.VehicleIdentification.VinLast5"));
        assert!(registry.is_hidden("MotHistory.RecordList[0].OdometerInKilometers"));
        assert!(!registry.is_hidden("VehicleDetails.VehicleIdentification.Vin"));
    }

    #[test]
    fn test_is_hidden_by_leaf_name() {
        let registry = Registry::build();
        assert!(registry.is_hidden("StatusCode"));
        assert!(registry.is_hidden("VehicleDetails.StatusCode"));
        assert!(registry.is_hidden("ModelDetails.Anything.GeneratedAt"));
        assert!(registry.is_hidden("Results.SubscriptionOptionList[2]"));
        assert!(!registry.is_hidden("VehicleDetails.statuscode"));
        assert!(!registry.is_hidden("VehicleDetails.StatusCodeExtra"));
    }

    #[test]
    fn test_overrides_replace_entries() {
        let override_config = FieldConfig {
            label: Some("Reg".into()),
            ..FieldConfig::default()
        };
        let extra = FieldConfig {
            formatter: Some(FormatterKind::Currency),
            ..FieldConfig::default()
        };
        let registry = Registry::build_with(
            [
                ("VehicleDetails.VehicleIdentification.Vrm", &override_config),
                ("Custom.Price", &extra),
            ],
            ["InternalRef"],
        );

        let vrm = registry.lookup("VehicleDetails.VehicleIdentification.Vrm").unwrap();
        assert_eq!(vrm.label.as_deref(), Some("Reg"));
        assert_eq!(vrm.formatter, None);
        assert_eq!(registry.lookup("Custom.Price").unwrap().formatter, Some(FormatterKind::Currency));
        assert!(registry.is_hidden("Custom.InternalRef"));
        assert!(registry.is_hidden("StatusCode"));
        assert_eq!(registry.len(), Registry::build().len() + 1);
    }

    #[test]
    fn test_override_can_hide_a_field() {
        let hide = FieldConfig {
            hidden: true,
            ..FieldConfig::default()
        };
        let registry = Registry::build_with([("VehicleTaxDetails.VedBand", &hide)], []);
        assert!(registry.is_hidden("VehicleTaxDetails.VedBand"));
    }

    #[test]
    fn test_label_for() {
        let registry = Registry::build();
        assert_eq!(registry.label_for("VehicleTaxDetails.Co2Emissions", Some("ignored")), "CO2 Emissions");
        assert_eq!(registry.label_for("Custom.SomeField", Some("Given")), "Given");
        assert_eq!(registry.label_for("Custom.NumberOfWheels", None), "Number Of Wheels");
        assert_eq!(registry.label_for("MotHistory.RecordList[1].TestDate", None), "Test Date");
    }

    #[test]
    fn test_entries_are_sorted_and_complete() {
        let registry = Registry::build();
        let paths: Vec<_> = registry.entries().map(|(path, _)| path).collect();
        let mut sorted = paths.clone();
        sorted.sort_unstable();
        assert_eq!(paths, sorted);
        assert_eq!(paths.len(), FIELD_DEFINITIONS.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_hidden_names_sorted() {
        let registry = Registry::build();
        let names = registry.hidden_names();
        assert_eq!(names.len(), HIDDEN_FIELD_NAMES.len());
        assert_eq!(names.first(), Some(&"AdditionalInformation"));
    }
}
