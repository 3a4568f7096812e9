use crate::table::ColumnSpec;
use serde::Deserialize;

/// A titled group of individual fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSection {
    pub title: String,
    pub fields: Vec<String>,
}

/// A titled table extracted from a list in the document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSection {
    pub title: String,
    pub path: String,
    pub columns: Vec<ColumnSpec>,
}

/// The sections and tables a report is assembled from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportLayout<'a> {
    pub sections: &'a [FieldSection],
    pub tables: &'a [TableSection],
}
