//! Report generation
//!
//! Generators that write an assembled [`VehicleReport`](crate::render::VehicleReport) in one output
//! format each. They only see display strings produced by the renderer, so every surface shows the same
//! values for the same document.
//!
//! - **Console**: aligned `label : value` lines and padded tables, optionally with ANSI styling
//! - **CSV**: `Section,Field,Value` rows, then one block per table
//! - **JSON**: the report structure, pretty-printed

mod console;
mod csv;
mod json;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use json::generate as generate_json;
