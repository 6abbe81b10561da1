use crate::cli::PointArgs;
use crate::output::OutputWriter;
use crate::output_types::CheckOutput;
use anyhow::Result;
use coordshift_core::transform::is_out_of_china;

pub fn execute(args: PointArgs, output: &OutputWriter) -> Result<()> {
    let out_of_china = is_out_of_china(args.lng, args.lat);

    if output.is_json() {
        output.result(CheckOutput { lng: args.lng, lat: args.lat, out_of_china })?;
    } else if out_of_china {
        output.info(format!("{},{} is outside China; GCJ-02 equals WGS-84 there", args.lng, args.lat));
    } else {
        output.success(format!("{},{} is inside China; GCJ-02 applies", args.lng, args.lat));
    }

    Ok(())
}
