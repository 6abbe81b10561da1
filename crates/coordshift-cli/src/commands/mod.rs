//! Command implementations

mod batch;
mod check;
mod config;
mod convert;
mod geojson;
mod regeo;
mod roundtrip;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config_with_overrides;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config_with_overrides(cli.config.as_deref(), cli.config_overrides())?;

    match cli.command {
        Commands::Convert(args) => convert::execute(args, &config, &output),
        Commands::Check(args) => check::execute(args, &output),
        Commands::Roundtrip(args) => roundtrip::execute(args, &config, &output),
        Commands::Batch(args) => batch::execute(args, &config, &output),
        Commands::Geojson(args) => geojson::execute(args, &config, &output),
        Commands::Regeo(args) => regeo::execute(args, &config, &output),
        Commands::Config => config::execute(cli.config.as_deref(), &config, &output),
    }
}
