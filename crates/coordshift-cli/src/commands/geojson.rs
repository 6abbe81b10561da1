use crate::cli::GeojsonArgs;
use crate::errors::input_not_found;
use crate::output::OutputWriter;
use crate::output_types::GeojsonOutput;
use anyhow::{Context, Result};
use coordshift_core::config::LayeredConfig;
use coordshift_geo::transform::{parse_geojson, transform_geojson};
use coordshift_geo::validation::validate_geojson;
use std::fs;

pub fn execute(args: GeojsonArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let from = config.default_from.value;
    let to = config.default_to.value;

    if !args.input.exists() {
        return Err(input_not_found(&args.input.display().to_string()).into());
    }

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let geojson = parse_geojson(&content)?;
    validate_geojson(&geojson).into_result()?;

    let (converted, summary) = transform_geojson(geojson, from, to);
    let document = serde_json::to_string_pretty(&converted)?;

    match args.output {
        // Without --output the document itself is the result
        None if output.is_json() => output.result(&converted)?,
        None => println!("{}", document),
        Some(path) => {
            fs::write(&path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            if output.is_json() {
                output.result(GeojsonOutput {
                    input: args.input.display().to_string(),
                    output: path.display().to_string(),
                    from,
                    to,
                    summary,
                })?;
            } else {
                output.success(format!(
                    "Converted {} → {}: {} positions ({} shifted, {} unchanged)",
                    from.label(),
                    to.label(),
                    summary.coordinates,
                    summary.shifted,
                    summary.passed_through
                ));
                output.kv("Written to", path.display());
            }
        }
    }

    Ok(())
}
