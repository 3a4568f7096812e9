use crate::Result;
use crate::document::FieldPath;
use crate::fields::{FIELD_DEFINITIONS, FieldConfig, Registry};
use crate::render::{FieldSection, ReportLayout, TableSection};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;

const LOG_TARGET: &str = "    config";

/// The default configuration YAML content, embedded from `default_config.yml`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../default_config.yml");

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Per-path overrides of the built-in field table
    #[serde(default)]
    pub fields: BTreeMap<String, FieldConfig>,

    /// Field names hidden in addition to the built-in list
    #[serde(default)]
    pub hidden_names: Vec<String>,

    #[serde(default)]
    pub sections: Vec<FieldSection>,

    #[serde(default)]
    pub tables: Vec<TableSection>,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, the first of `report.toml`, `report.yml`, `report.yaml` and `report.json`
    /// found in `base_dir` is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading report configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let candidates = [
                base_dir.join("report.toml"),
                base_dir.join("report.yml"),
                base_dir.join("report.yaml"),
                base_dir.join("report.json"),
            ];

            let mut found = None;
            for path in &candidates {
                match fs::read_to_string(path) {
                    Ok(text) => {
                        found = Some((path.clone(), text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading report configuration from {path}")),
                }
            }

            let Some(result) = found else {
                log::debug!(target: LOG_TARGET, "no configuration file in {base_dir}, using defaults");
                return Ok((Self::default(), Vec::new()));
            };
            result
        };

        log::info!(target: LOG_TARGET, "loading configuration from {final_path}");

        let extension = final_path.extension().unwrap_or_default();
        let config: Self = match extension {
            "toml" => toml::from_str(&text).into_app_err_with(|| format!("parsing TOML configuration from {final_path}"))?,
            "yml" | "yaml" => serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML configuration from {final_path}"))?,
            "json" => serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON configuration from {final_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        let warnings = config.validate();
        Ok((config, warnings))
    }

    /// Save the default configuration to a file
    ///
    /// YAML output is the embedded `default_config.yml` verbatim, comments included. TOML and JSON output
    /// are re-serialized from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the extension is not supported
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();
        let text = match extension {
            "yml" | "yaml" => DEFAULT_CONFIG_YAML.to_string(),
            "toml" => {
                let value: serde_yaml::Value = serde_yaml::from_str(DEFAULT_CONFIG_YAML).into_app_err("parsing default configuration")?;
                toml::to_string_pretty(&value).into_app_err_with(|| format!("serializing configuration to TOML for saving to {output_path}"))?
            }
            "json" => {
                let value: serde_yaml::Value = serde_yaml::from_str(DEFAULT_CONFIG_YAML).into_app_err("parsing default configuration")?;
                serde_json::to_string_pretty(&value)
                    .into_app_err_with(|| format!("serializing configuration to JSON for saving to {output_path}"))?
            }
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        fs::write(output_path, text).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Build the field registry with this configuration's overrides applied
    #[must_use]
    pub fn build_registry(&self) -> Registry {
        Registry::build_with(
            self.fields.iter().map(|(path, config)| (path.as_str(), config)),
            self.hidden_names.iter().map(String::as_str),
        )
    }

    /// The sections and tables to render
    #[must_use]
    pub fn layout(&self) -> ReportLayout<'_> {
        ReportLayout {
            sections: &self.sections,
            tables: &self.tables,
        }
    }

    /// Detect settings that load fine but are unlikely to do what was intended
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let known: HashSet<&str> = FIELD_DEFINITIONS.iter().map(|def| def.path).collect();
        for path in self.fields.keys() {
            if !known.contains(FieldPath::parse(path).canonical().as_str()) {
                warnings.push(format!("field override '{path}' does not match a built-in field and adds a new entry"));
            }
        }

        let registry = self.build_registry();
        let mut titles = HashSet::new();
        for section in &self.sections {
            if !titles.insert(section.title.as_str()) {
                warnings.push(format!("section title '{}' is used more than once", section.title));
            }

            if section.fields.is_empty() {
                warnings.push(format!("section '{}' lists no fields", section.title));
            }

            for path in &section.fields {
                if registry.is_hidden(path) {
                    warnings.push(format!("field '{path}' in section '{}' is hidden and will never be shown", section.title));
                }
            }
        }

        let mut titles = HashSet::new();
        for table in &self.tables {
            if !titles.insert(table.title.as_str()) {
                warnings.push(format!("table title '{}' is used more than once", table.title));
            }

            if table.columns.is_empty() {
                warnings.push(format!("table '{}' has no columns", table.title));
            }

            for column in &table.columns {
                if column.transform.is_none() && column.path.is_empty() {
                    warnings.push(format!(
                        "column '{}' of table '{}' has neither a path nor a transform",
                        column.label, table.title
                    ));
                }
            }
        }

        for warning in &warnings {
            log::debug!(target: LOG_TARGET, "{warning}");
        }

        warnings
    }
}

impl Default for Config {
    fn default() -> Self {
        serde_yaml::from_str(DEFAULT_CONFIG_YAML).expect("default_config.yml should be valid YAML that deserializes to Config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{FormatterKind, UnitKind};
    use tempfile::TempDir;

    fn temp_dir() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_empty(), "{:?}", config.validate());
        assert!(config.fields.is_empty());
        assert!(!config.sections.is_empty());
        assert!(!config.tables.is_empty());
    }

    #[test]
    fn test_default_config_uses_builtin_transforms() {
        let config = Config::default();
        let mot = config.tables.iter().find(|t| t.title == "MOT History").unwrap();
        assert_eq!(mot.columns.iter().filter(|c| c.transform.is_some()).count(), 2);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let (_dir, base) = temp_dir();
        let (config, warnings) = Config::load(&base, None).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(config.sections.len(), Config::default().sections.len());
    }

    #[test]
    fn test_load_toml() {
        let (_dir, base) = temp_dir();
        fs::write(
            base.join("report.toml"),
            r#"
hidden_names = ["Software"]

[fields."VehicleTaxDetails.VedBand"]
label = "Band"
formatter = "uppercase"

[[sections]]
title = "Tax"
fields = ["VehicleTaxDetails.VedBand"]
"#,
        )
        .unwrap();

        let (config, warnings) = Config::load(&base, None).unwrap();
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.fields["VehicleTaxDetails.VedBand"].formatter, Some(FormatterKind::Uppercase));
        assert_eq!(config.sections.len(), 1);
        assert!(config.tables.is_empty());
    }

    #[test]
    fn test_load_prefers_toml_over_yaml() {
        let (_dir, base) = temp_dir();
        fs::write(base.join("report.toml"), "hidden_names = [\"FromToml\"]\n").unwrap();
        fs::write(base.join("report.yml"), "hidden_names: [FromYaml]\n").unwrap();

        let (config, _) = Config::load(&base, None).unwrap();
        assert_eq!(config.hidden_names, ["FromToml"]);
    }

    #[test]
    fn test_load_explicit_json() {
        let (_dir, base) = temp_dir();
        let path = base.join("custom.json");
        fs::write(&path, r#"{"fields": {"Custom.Range": {"unit": "miles"}}}"#).unwrap();

        let (config, warnings) = Config::load(&base, Some(&path)).unwrap();
        assert_eq!(config.fields["Custom.Range"].unit, Some(UnitKind::Miles));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Custom.Range"));
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let (_dir, base) = temp_dir();
        fs::write(base.join("report.yaml"), "colour: red\n").unwrap();
        let _ = Config::load(&base, None).unwrap_err();
    }

    #[test]
    fn test_load_rejects_unknown_transform() {
        let (_dir, base) = temp_dir();
        fs::write(
            base.join("report.yml"),
            "tables:\n  - title: T\n    path: L\n    columns:\n      - label: X\n        transform: nope\n",
        )
        .unwrap();
        let _ = Config::load(&base, None).unwrap_err();
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let (_dir, base) = temp_dir();
        let path = base.join("report.ini");
        fs::write(&path, "").unwrap();
        let _ = Config::load(&base, Some(&path)).unwrap_err();
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let (_dir, base) = temp_dir();
        let _ = Config::load(&base, Some(&base.join("absent.toml"))).unwrap_err();
    }

    #[test]
    fn test_validate_warnings() {
        let config: Config = serde_yaml::from_str(
            r"
sections:
  - title: A
    fields: [StatusCode, VehicleDetails.VehicleIdentification.VinLast5]
  - title: A
    fields: []
tables:
  - title: Empty
    path: Recalls
    columns: []
  - title: Empty
    path: Recalls
    columns:
      - label: Nothing
",
        )
        .unwrap();

        let warnings = config.validate();
        assert_eq!(warnings.len(), 7, "{warnings:?}");
        assert!(warnings.iter().any(|w| w.contains("StatusCode")));
        assert!(warnings.iter().any(|w| w.contains("VinLast5")));
        assert!(warnings.iter().any(|w| w.contains("section title 'A'")));
        assert!(warnings.iter().any(|w| w.contains("section 'A' lists no fields")));
        assert!(warnings.iter().any(|w| w.contains("table title 'Empty'")));
        assert!(warnings.iter().any(|w| w.contains("has no columns")));
        assert!(warnings.iter().any(|w| w.contains("neither a path nor a transform")));
    }

    #[test]
    fn test_indexed_override_matches_builtin() {
        let config: Config = serde_yaml::from_str("fields:\n  MotHistory.RecordList[0].TestDate:\n    label: First Test\n").unwrap();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_build_registry_applies_overrides() {
        let config: Config = serde_yaml::from_str(
            "fields:\n  VehicleTaxDetails.VedBand:\n    hidden: true\nhidden_names: [DvlaMake]\n",
        )
        .unwrap();
        let registry = config.build_registry();
        assert!(registry.is_hidden("VehicleTaxDetails.VedBand"));
        assert!(registry.is_hidden("VehicleDetails.VehicleIdentification.DvlaMake"));
    }

    #[test]
    fn test_save_default_round_trips() {
        let (_dir, base) = temp_dir();
        let expected = Config::default();

        for name in ["out.yml", "out.toml", "out.json"] {
            let path = base.join(name);
            Config::save_default(&path).unwrap();
            let (config, warnings) = Config::load(&base, Some(&path)).unwrap();
            assert!(warnings.is_empty(), "{name}: {warnings:?}");
            assert_eq!(config.sections.len(), expected.sections.len(), "{name}");
            assert_eq!(config.tables.len(), expected.tables.len(), "{name}");
        }
    }

    #[test]
    fn test_save_default_yaml_is_verbatim() {
        let (_dir, base) = temp_dir();
        let path = base.join("report.yaml");
        Config::save_default(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_YAML);
    }

    #[test]
    fn test_save_default_rejects_unknown_extension() {
        let (_dir, base) = temp_dir();
        let _ = Config::save_default(&base.join("report.txt")).unwrap_err();
    }
}
