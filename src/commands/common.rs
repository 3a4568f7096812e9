use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use std::fs;
use std::io::{IsTerminal, Read, stdin, stdout};
use vehicle_report::Result;
use vehicle_report::config::Config;
use vehicle_report::document::Value;

const LOG_TARGET: &str = "       cli";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    /// Whether output written to stdout should be colored
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout().is_terminal(),
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug and above messages
    Debug,

    /// All messages including trace
    Trace,
}

/// Configuration file selection shared by all commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to configuration file [default: one of report.[toml|yml|yaml|json] ]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

impl ConfigArgs {
    /// Load the configuration, printing any validation warnings
    pub fn load(&self) -> Result<Config> {
        let (config, warnings) = Config::load(Utf8Path::new("."), self.config.as_ref())?;
        print_warnings(&warnings);
        Ok(config)
    }
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

pub fn print_warnings(warnings: &[String]) {
    if !warnings.is_empty() {
        eprintln!("\n⚠️  Configuration validation warnings:");
        for warning in warnings {
            eprintln!("   {warning}");
        }
        eprintln!();
    }
}

/// Read a JSON document from a file, or from stdin when the path is `-`
pub fn load_document(path: &Utf8Path) -> Result<Value> {
    let text = if path.as_str() == "-" {
        let mut text = String::new();
        let _ = stdin().read_to_string(&mut text).into_app_err("reading document from stdin")?;
        text
    } else {
        fs::read_to_string(path).into_app_err_with(|| format!("reading document from {path}"))?
    };

    let document = serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON document from {path}"))?;
    log::info!(target: LOG_TARGET, "loaded document from {path}");
    Ok(document)
}
