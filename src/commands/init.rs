use camino::Utf8PathBuf;
use clap::Parser;
use vehicle_report::Result;
use vehicle_report::config::Config;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output configuration file path (`.yml`, `.yaml`, `.toml`, or `.json`)
    #[arg(value_name = "PATH", default_value = "report.yml")]
    pub output: Utf8PathBuf,
}

pub fn init_config(args: &InitArgs) -> Result<()> {
    Config::save_default(&args.output)?;
    println!("Generated default configuration file: {}", args.output);
    Ok(())
}
