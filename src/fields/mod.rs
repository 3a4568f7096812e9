//! Field configuration registry
//!
//! Report rendering is data-driven: instead of per-field code, every field path the report knows about
//! has a [`FieldConfig`] saying how its value is labelled and formatted, and whether it is suppressed.
//!
//! # Implementation Model
//!
//! The built-in entries live in a static table in `field_def.rs`, together with a list of bare field
//! names (`StatusCode`, `GeneratedAt`, ...) that the upstream provider repeats under many parents. A
//! [`Registry`] is built from those tables exactly once, optionally merged with overrides from
//! configuration, and is read-only from then on. Callers pass it by reference to the renderer.
//!
//! Suppression has two sources, an exact path flagged `hidden` and a leaf name in the hidden-name set,
//! but both are answered by the single [`Registry::is_hidden`] check.

mod field_config;
mod field_def;
mod label;
mod registry;

pub use field_config::FieldConfig;
pub use field_def::{FIELD_DEFINITIONS, FieldDef, HIDDEN_FIELD_NAMES};
pub use label::humanize;
pub use registry::Registry;
