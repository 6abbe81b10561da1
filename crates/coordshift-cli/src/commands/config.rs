use crate::config_loader::resolve_config_path;
use crate::output::OutputWriter;
use crate::output_types::ConfigRow;
use anyhow::Result;
use coordshift_core::config::LayeredConfig;
use std::path::Path;

/// Keys in display order
const KEYS: [&str; 6] =
    ["default_from", "default_to", "precision", "amap_key", "amap_base_url", "regeo_radius"];

pub fn execute(explicit: Option<&Path>, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let map = config.to_inspection_map();

    let rows: Vec<ConfigRow> = KEYS
        .iter()
        .filter_map(|key| {
            map.get(*key).map(|(value, source)| ConfigRow {
                key: key.to_string(),
                value: value.clone(),
                source: format!("{:?}", source),
            })
        })
        .collect();

    if !output.is_json() {
        match resolve_config_path(explicit) {
            Some(path) => output.kv("Config file", path.display()),
            None => output.kv("Config file", "(none)"),
        }
    }

    output.table(rows)
}
