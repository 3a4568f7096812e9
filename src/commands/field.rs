use super::common::{ConfigArgs, load_document};
use camino::Utf8PathBuf;
use clap::Parser;
use vehicle_report::Result;
use vehicle_report::render::Renderer;

#[derive(Parser, Debug)]
pub struct FieldArgs {
    /// Document to read (`-` reads stdin)
    #[arg(value_name = "DOCUMENT")]
    pub document: Utf8PathBuf,

    /// Field paths to render, e.g. `MotHistory.RecordList[0].TestDate`
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Show the field label instead of the path
    #[arg(long)]
    pub labels: bool,
}

pub fn render_fields(args: &FieldArgs) -> Result<()> {
    let config = args.config.load()?;
    let registry = config.build_registry();
    let document = load_document(&args.document)?;
    let renderer = Renderer::new(&registry);

    for path in &args.paths {
        let field = renderer.render_field(&document, path);
        if args.labels {
            println!("{} = {}", field.label, field.value);
        } else {
            println!("{} = {}", field.path, field.value);
        }
    }

    Ok(())
}
