use super::common::{ColorMode, ConfigArgs, load_document};
use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use ohno::IntoAppError;
use std::fs;
use vehicle_report::Result;
use vehicle_report::render::Renderer;
use vehicle_report::reports::{generate_console, generate_csv, generate_json};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Aligned text for the terminal
    Console,

    /// Comma-separated values
    Csv,

    /// Structured JSON
    Json,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Document to render (`-` reads stdin)
    #[arg(value_name = "DOCUMENT")]
    pub document: Utf8PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "console")]
    pub format: ReportFormat,

    /// Write the report to a file instead of to the terminal
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,
}

pub fn render_document(args: &RenderArgs) -> Result<()> {
    let config = args.config.load()?;
    let registry = config.build_registry();
    let document = load_document(&args.document)?;

    let report = Renderer::new(&registry).build_report(&document, &config.layout());

    let mut text = String::new();
    match args.format {
        ReportFormat::Console => {
            let use_colors = args.output.is_none() && args.color.enabled();
            generate_console(&report, use_colors, &mut text)?;
        }
        ReportFormat::Csv => generate_csv(&report, &mut text)?,
        ReportFormat::Json => generate_json(&report, &mut text)?,
    }

    if let Some(path) = &args.output {
        fs::write(path, text).into_app_err_with(|| format!("writing report to {path}"))?;
        println!("Generated report: {path}");
    } else {
        print!("{text}");
    }

    Ok(())
}
