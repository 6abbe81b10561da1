use crate::cli::BatchArgs;
use crate::errors::{input_not_found, invalid_batch_lines};
use crate::output::OutputWriter;
use crate::output_types::{BatchItem, BatchOutput};
use anyhow::{Context, Result};
use coordshift_core::config::LayeredConfig;
use coordshift_core::models::{CoordFrame, GeoPoint};
use coordshift_core::transform::convert;
use coordshift_geo::validation::validate_point;
use std::fs;
use std::io;
use std::path::Path;

pub fn execute(args: BatchArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let from = config.default_from.value;
    let to = config.default_to.value;

    let content = read_input(args.input.as_deref())?;
    let items = convert_lines(&content, from, to)?;

    tracing::info!(count = items.len(), from = %from, to = %to, "Converted batch input");

    if output.is_json() {
        output.result(BatchOutput { from, to, count: items.len(), points: items })?;
    } else {
        let precision = config.precision.value;
        for item in &items {
            println!("{:.*}", precision, item.output);
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        None => read_stdin(),
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => {
            if !path.exists() {
                return Err(input_not_found(&path.display().to_string()).into());
            }
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
    }
}

fn read_stdin() -> Result<String> {
    io::read_to_string(io::stdin()).context("Failed to read stdin")
}

/// Convert every `lng,lat` line; blank lines and `#` comments are skipped.
///
/// Nothing is returned unless every remaining line parses and validates.
fn convert_lines(content: &str, from: CoordFrame, to: CoordFrame) -> Result<Vec<BatchItem>> {
    let mut items = Vec::new();
    let mut failures = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parsed = trimmed
            .parse::<GeoPoint>()
            .and_then(|point| validate_point(&point).into_result().map(|_| point));

        match parsed {
            Ok(input) => items.push(BatchItem { line, input, output: convert(input, from, to) }),
            Err(e) => failures.push((line, e.to_string())),
        }
    }

    if !failures.is_empty() {
        return Err(invalid_batch_lines(&failures).into());
    }

    Ok(items)
}
