use super::{ReportField, ReportLayout, ReportSection, ReportTable, TableSection, VehicleReport};
use crate::document::{Value, resolve};
use crate::fields::Registry;
use crate::format::{FormatterKind, SENTINEL, apply_formatter, format_date, format_value, is_empty};
use crate::table::{Table, extract_table};

const LOG_TARGET: &str = "    render";

/// Title of the section used when no sections are configured.
const DEFAULT_SECTION_TITLE: &str = "Vehicle Data";

/// Renders document fields through a [`Registry`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'r> {
    registry: &'r Registry,
}

impl<'r> Renderer<'r> {
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Render the field at `path` of `document`.
    ///
    /// `fallback_label` is the caller's name for the field; when no registry entry governs the field and
    /// the label mentions "date", the value is formatted as a date.
    #[must_use]
    pub fn render(&self, document: &Value, path: &str, fallback_label: Option<&str>) -> String {
        if self.registry.is_hidden(path) {
            return SENTINEL.to_string();
        }

        self.render_resolved(resolve(document, path), path, fallback_label)
    }

    /// Render a value already resolved from `path`.
    #[must_use]
    pub fn render_resolved(&self, value: Option<&Value>, path: &str, fallback_label: Option<&str>) -> String {
        if self.registry.is_hidden(path) {
            return SENTINEL.to_string();
        }

        if let Some(config) = self.registry.lookup(path)
            && (config.formatter.is_some() || config.unit.is_some())
        {
            return format_value(value, config.formatter, config.unit);
        }

        render_by_type(value, fallback_label)
    }

    /// Render one field together with its label.
    #[must_use]
    pub fn render_field(&self, document: &Value, path: &str) -> ReportField {
        let label = self.registry.label_for(path, None);
        let value = self.render(document, path, Some(&label));
        ReportField {
            path: path.to_string(),
            label,
            value,
        }
    }

    /// Render every visible leaf of a document, in path order.
    ///
    /// Containers that are hidden are skipped whole. Lists of objects are expanded element by element,
    /// lists of scalars are one field.
    #[must_use]
    pub fn flatten(&self, document: &Value) -> Vec<ReportField> {
        let mut fields = Vec::new();
        self.walk(document, String::new(), &mut fields);
        fields
    }

    fn walk(&self, value: &Value, path: String, fields: &mut Vec<ReportField>) {
        if !path.is_empty() && self.registry.is_hidden(&path) {
            log::trace!(target: LOG_TARGET, "skipping hidden '{path}'");
            return;
        }

        match value {
            Value::Mapping(map) => {
                for (key, child) in map {
                    let child_path = if path.is_empty() { key.to_string() } else { format!("{path}.{key}") };
                    self.walk(child, child_path, fields);
                }
            }
            Value::Sequence(items) if items.iter().any(Value::is_container) => {
                for (index, item) in items.iter().enumerate() {
                    self.walk(item, format!("{path}[{index}]"), fields);
                }
            }
            _ if path.is_empty() => {}
            _ => {
                let label = self.registry.label_for(&path, None);
                let rendered = self.render_resolved(Some(value), &path, Some(&label));
                fields.push(ReportField {
                    path,
                    label,
                    value: rendered,
                });
            }
        }
    }

    /// Extract one configured table.
    #[must_use]
    pub fn table(&self, document: &Value, section: &TableSection) -> Option<Table> {
        extract_table(document, &section.path, &section.columns)
    }

    /// Render a whole report.
    ///
    /// With no field sections, every visible field is rendered into a single section. Tables whose list is
    /// missing or empty are left out.
    #[must_use]
    pub fn build_report(&self, document: &Value, layout: &ReportLayout<'_>) -> VehicleReport {
        let sections = if layout.sections.is_empty() {
            vec![ReportSection {
                title: DEFAULT_SECTION_TITLE.to_string(),
                fields: self.flatten(document),
            }]
        } else {
            layout
                .sections
                .iter()
                .map(|section| ReportSection {
                    title: section.title.clone(),
                    fields: section
                        .fields
                        .iter()
                        .filter(|path| !self.registry.is_hidden(path))
                        .map(|path| self.render_field(document, path))
                        .collect(),
                })
                .collect()
        };

        let tables = layout
            .tables
            .iter()
            .filter_map(|section| {
                let table = self.table(document, section);
                if table.is_none() {
                    log::debug!(target: LOG_TARGET, "omitting table '{}': no rows at '{}'", section.title, section.path);
                }
                table.map(|table| ReportTable {
                    title: section.title.clone(),
                    table,
                })
            })
            .collect();

        VehicleReport { sections, tables }
    }
}

fn render_by_type(value: Option<&Value>, fallback_label: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !is_empty(Some(v))) else {
        return SENTINEL.to_string();
    };

    match value {
        Value::Bool(_) => apply_formatter(Some(value), FormatterKind::Boolean),
        Value::DateTime(_) => format_date(Some(value)),
        _ if fallback_label.is_some_and(|label| label.to_lowercase().contains("date")) => format_date(Some(value)),
        _ => format_value(Some(value), None, None),
    }
}
