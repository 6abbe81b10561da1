use crate::cli::RegeoArgs;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use coordshift_core::config::LayeredConfig;
use coordshift_core::geocode::AmapGeocoder;
use coordshift_core::models::GeoPoint;
use coordshift_core::ports::ReverseGeocoder;
use coordshift_geo::validation::validate_point;

pub fn execute(args: RegeoArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let point = GeoPoint::new(args.lng, args.lat);
    validate_point(&point).into_result()?;

    if point.is_out_of_china() {
        output.warning("AMap only covers China; the lookup will likely return no address");
    }

    let geocoder = AmapGeocoder::from_config(config)?;

    // The only network call in the CLI, so the runtime is created here
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let result = runtime.block_on(geocoder.reverse_geocode(point))?;

    if output.is_json() {
        output.result(&result)?;
    } else {
        let precision = config.precision.value;
        if result.formatted_address.is_empty() {
            output.info("No address found for this location");
        } else {
            println!("{}", result.formatted_address);
        }
        output.kv("Provider", &result.provider);
        output.kv(
            format!("Query point ({})", result.frame.label()),
            format!("{:.*}", precision, result.query_point),
        );
    }

    Ok(())
}
