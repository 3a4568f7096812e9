//! Field resolution and formatting engine for vehicle-history reports.
//!
//! Vehicle data arrives as a deeply nested, loosely typed document. This crate turns any leaf of that
//! document into a display string (currency, date, unit-suffixed number, Yes/No, plain text) driven by a
//! static field registry, and extracts list-valued sections into header/row tables. Every report surface
//! (console, CSV, JSON) renders through the same [`render::Renderer`], so a value looks identical everywhere.
//!
//! # Module Organization
//!
//! - [`document`]: Tagged document value model and path resolution
//! - [`fields`]: Field configuration registry and hidden-field suppression
//! - [`format`]: Unit and formatter library, empty-value sentinel
//! - [`table`]: List-to-table extraction
//! - [`render`]: The report value facade and whole-report assembly
//! - [`config`]: Report layout and registry overrides loaded from disk
//! - [`reports`]: Output generators consuming an assembled report

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod config;
pub mod document;
pub mod fields;
pub mod format;
pub mod render;
pub mod reports;
pub mod table;
