use crate::cli::ConvertArgs;
use crate::output::OutputWriter;
use crate::output_types::ConvertOutput;
use anyhow::Result;
use coordshift_core::config::LayeredConfig;
use coordshift_core::models::GeoPoint;
use coordshift_core::transform::convert;
use coordshift_geo::spatial::offset_distance;
use coordshift_geo::validation::validate_point;

pub fn execute(args: ConvertArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let from = config.default_from.value;
    let to = config.default_to.value;
    let precision = config.precision.value;

    let input = GeoPoint::new(args.lng, args.lat);
    validate_point(&input).into_result()?;

    let converted = convert(input, from, to);
    let shifted = converted != input;

    if output.is_json() {
        output.result(ConvertOutput {
            from,
            to,
            input,
            output: converted,
            shifted,
            offset_meters: offset_distance(input, converted),
        })?;
    } else {
        println!("{:.*}", precision, converted);
        if from != to && !shifted {
            output.warning(format!("{:.*} is outside China; returned unchanged", precision, input));
        }
    }

    Ok(())
}
