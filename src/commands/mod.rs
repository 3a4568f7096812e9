//! Command-line interface for vehicle-report
//!
//! Each subcommand loads the report configuration (explicit `--config` path, else a `report.*` file in
//! the current directory, else the built-in defaults), builds the field registry from it once, and then
//! renders through the library:
//!
//! - **render**: assemble a full report and write it as console text, CSV, or JSON
//! - **field**: render chosen paths as `path = value` lines
//! - **fields**: list the effective registry and hidden names
//! - **init**: write the built-in configuration to a file
//! - **validate**: load a configuration and report warnings

mod common;
mod field;
mod fields;
mod init;
mod render;
mod validate;

pub use common::{LogLevel, init_logging};
pub use field::{FieldArgs, render_fields};
pub use fields::{FieldsArgs, list_fields};
pub use init::{InitArgs, init_config};
pub use render::{RenderArgs, render_document};
pub use validate::{ValidateArgs, validate_config};
