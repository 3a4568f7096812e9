use super::common::ConfigArgs;
use clap::Parser;
use vehicle_report::Result;

#[derive(Parser, Debug)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Only list entries whose path contains this text
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,
}

pub fn list_fields(args: &FieldsArgs) -> Result<()> {
    let config = args.config.load()?;
    let registry = config.build_registry();

    let entries: Vec<_> = registry
        .entries()
        .filter(|(path, _)| args.filter.as_deref().is_none_or(|filter| path.contains(filter)))
        .collect();
    let width = entries.iter().map(|(path, _)| path.len()).max().unwrap_or(0);

    for (path, field) in entries {
        let mut details = Vec::new();
        if field.hidden {
            details.push("hidden".to_string());
        } else {
            details.push(registry.label_for(path, None));
        }
        if let Some(unit) = field.unit {
            details.push(format!("unit={unit}"));
        }
        if let Some(formatter) = field.formatter {
            details.push(format!("formatter={formatter}"));
        }
        println!("{path:<width$}  {}", details.join(", "));
    }

    println!();
    println!("Hidden field names: {}", registry.hidden_names().join(", "));
    Ok(())
}
