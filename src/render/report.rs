use crate::table::Table;
use serde::Serialize;

/// One rendered field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportField {
    pub path: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub fields: Vec<ReportField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    pub title: String,
    #[serde(flatten)]
    pub table: Table,
}

/// A fully rendered report, ready for any output surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VehicleReport {
    pub sections: Vec<ReportSection>,
    pub tables: Vec<ReportTable>,
}
