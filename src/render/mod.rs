//! Report value facade
//!
//! [`Renderer`] is the single entry point report surfaces use to turn a document field into display text.
//! It combines the registry, the path resolver, and the formatter library, in this order:
//!
//! 1. A hidden field renders as the sentinel, whatever its value.
//! 2. A registered formatter is applied, with the registered unit appended when the formatter produced
//!    data.
//! 3. Otherwise a registered unit is applied.
//! 4. Otherwise the value's own type decides: booleans become Yes/No, typed dates and fields whose label
//!    mentions "date" are formatted as dates, and anything else is shown as plain text.
//!
//! No step can fail. One malformed field degrades to the sentinel without affecting the rest of a report.
//!
//! Beyond single fields, the renderer flattens a whole document into labelled fields and assembles a
//! [`VehicleReport`] from configured sections and tables, which the generators in `reports` consume.

mod layout;
mod renderer;
mod report;

pub use layout::{FieldSection, ReportLayout, TableSection};
pub use renderer::Renderer;
pub use report::{ReportField, ReportSection, ReportTable, VehicleReport};
