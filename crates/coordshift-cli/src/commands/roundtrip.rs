use crate::cli::PointArgs;
use crate::output::OutputWriter;
use crate::output_types::RoundtripOutput;
use anyhow::Result;
use coordshift_core::config::LayeredConfig;
use coordshift_core::models::GeoPoint;
use coordshift_geo::spatial::round_trip_error;
use coordshift_geo::validation::validate_point;

pub fn execute(args: PointArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let input = GeoPoint::new(args.lng, args.lat);
    validate_point(&input).into_result()?;

    let gcj02 = input.to_gcj02();
    let recovered = gcj02.to_wgs84();
    let result = RoundtripOutput {
        input,
        gcj02,
        recovered,
        error_lng: (recovered.lng - input.lng).abs(),
        error_lat: (recovered.lat - input.lat).abs(),
        error_meters: round_trip_error(input),
    };

    if output.is_json() {
        output.result(result)?;
    } else {
        let precision = config.precision.value;
        output.section("Round trip");
        output.kv("WGS-84", format!("{:.*}", precision, result.input));
        output.kv("GCJ-02", format!("{:.*}", precision, result.gcj02));
        output.kv("Recovered", format!("{:.*}", precision, result.recovered));
        output.kv("Error (deg)", format!("{:.3e}, {:.3e}", result.error_lng, result.error_lat));
        output.kv("Error (m)", format!("{:.3}", result.error_meters));
    }

    Ok(())
}
