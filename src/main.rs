//! Render loosely-typed vehicle-history documents as readable reports.
//!
//! # Overview
//!
//! `vehicle-report` reads a vehicle data document (JSON, as returned by UK vehicle-data providers) and
//! renders every field through a built-in registry of labels, units, and formatters: prices become
//! `£12,500.00`, timestamps become `01/09/2018`, emissions become `118 g/km`, and any field that is
//! missing, `null`, or malformed becomes `N/A`. Provider metadata such as status codes and request
//! details is never shown.
//!
//! # Usage
//!
//! **Render a report to the terminal:**
//! ```bash
//! vehicle-report render vehicle.json
//! ```
//!
//! **Render as CSV or JSON:**
//! ```bash
//! vehicle-report render vehicle.json --format csv --output vehicle.csv
//! vehicle-report render vehicle.json --format json
//! ```
//!
//! **Render individual fields:**
//! ```bash
//! vehicle-report field vehicle.json VehicleTaxDetails.Co2Emissions "MotHistory.RecordList[0].TestDate"
//! ```
//!
//! **Inspect the field registry:**
//! ```bash
//! vehicle-report fields
//! ```
//!
//! # Configuration
//!
//! Report sections, tables, and per-field overrides come from `report.toml`, `report.yml`,
//! `report.yaml`, or `report.json` in the current directory, or from the file given with `--config`.
//! Without one, the built-in layout is used.
//!
//! ```bash
//! vehicle-report init report.yml      # write the built-in configuration
//! vehicle-report validate             # check a configuration
//! ```
//!
//! A configuration can relabel or reformat fields, hide fields, and define the report layout:
//!
//! ```yaml
//! fields:
//!   VehicleTaxDetails.VedBand:
//!     label: Tax Band
//!     formatter: uppercase
//!   ModelDetails.Performance.Statistics.MaxSpeedKph:
//!     hidden: true
//!
//! hidden_names: [InternalReference]
//!
//! sections:
//!   - title: Summary
//!     fields:
//!       - VehicleDetails.VehicleIdentification.Vrm
//!       - VehicleTaxDetails.Co2Emissions
//!
//! tables:
//!   - title: MOT History
//!     path: MotHistory.RecordList
//!     columns:
//!       - label: Date
//!         path: TestDate
//!         formatter: date
//!       - label: Mileage
//!         transform: odometer
//! ```
//!
//! # Logging
//!
//! Use `--log-level` (`error`, `warn`, `info`, `debug`, `trace`) to see diagnostics, including which
//! fields degraded to `N/A` and why. `RUST_LOG` overrides the level.

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use vehicle_report::Result;

mod commands;

use crate::commands::{
    FieldArgs, FieldsArgs, InitArgs, LogLevel, RenderArgs, ValidateArgs, init_config, init_logging, list_fields, render_document,
    render_fields, validate_config,
};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "vehicle-report", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a document as a report
    Render(RenderArgs),
    /// Render individual fields of a document
    Field(FieldArgs),
    /// List the field registry
    Fields(FieldsArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match &cli.command {
        Command::Render(args) => render_document(args),
        Command::Field(args) => render_fields(args),
        Command::Fields(args) => list_fields(args),
        Command::Init(args) => init_config(args),
        Command::Validate(args) => validate_config(args),
    }
}
