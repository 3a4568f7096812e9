//! List-to-table extraction
//!
//! Report sections such as MOT history or keeper changes are lists of objects in the source document.
//! [`extract_table`] turns such a list into a header row plus one row of display strings per element,
//! using a [`ColumnSpec`] per column. Column paths are resolved against each element, not the document.
//!
//! A list that is missing, empty, or not a list yields `None`, so callers omit the section instead of
//! printing an empty table.

mod column;
mod transforms;

pub use column::{ColumnSpec, Transform};
pub use transforms::{builtin_transform, builtin_transform_names};

use crate::document::{Value, resolve};
use crate::format::{SENTINEL, format_value};
use serde::Serialize;

const LOG_TARGET: &str = "     table";

/// Headers plus rows of display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Extract a table from the list at `list_path`.
///
/// Rows keep the order of the source list and cells keep the order of `columns`.
#[must_use]
pub fn extract_table(document: &Value, list_path: &str, columns: &[ColumnSpec]) -> Option<Table> {
    let rows = resolve(document, list_path)?.as_sequence()?;
    if rows.is_empty() {
        return None;
    }

    log::trace!(target: LOG_TARGET, "extracting {} rows x {} columns from '{list_path}'", rows.len(), columns.len());

    let headers = columns.iter().map(|column| column.label.clone()).collect();
    let rows = rows
        .iter()
        .map(|row| columns.iter().map(|column| render_cell(row, document, column)).collect())
        .collect();

    Some(Table { headers, rows })
}

fn render_cell(row: &Value, document: &Value, column: &ColumnSpec) -> String {
    if let Some(transform) = column.transform {
        return match transform(row, document) {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => SENTINEL.to_string(),
            Err(e) => {
                log::debug!(target: LOG_TARGET, "transform for column '{}' failed: {e}", column.label);
                SENTINEL.to_string()
            }
        };
    }

    format_value(resolve(row, &column.path), column.formatter, column.unit)
}
