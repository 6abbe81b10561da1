use clap::{Args, Parser, Subcommand};
use coordshift_core::config::CliConfigOverrides;
use coordshift_core::models::CoordFrame;
use std::path::PathBuf;

/// coordshift - WGS-84 / GCJ-02 coordinate conversion
#[derive(Parser, Debug)]
#[command(name = "coordshift")]
#[command(about = "Convert coordinates between WGS-84 and GCJ-02", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./coordshift.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Decimal places in human-readable output (0-15)
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(0..=15))]
    pub precision: Option<u8>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Collect the values given on the command line that override configuration
    pub fn config_overrides(&self) -> CliConfigOverrides {
        let mut overrides = CliConfigOverrides {
            precision: self.precision.map(usize::from),
            ..Default::default()
        };

        let frames = match &self.command {
            Commands::Convert(args) => Some(&args.frames),
            Commands::Batch(args) => Some(&args.frames),
            Commands::Geojson(args) => Some(&args.frames),
            _ => None,
        };
        if let Some(frames) = frames {
            overrides.default_from = frames.from;
            overrides.default_to = frames.to;
        }

        if let Commands::Regeo(args) = &self.command {
            overrides.amap_key = args.amap_key.clone();
        }

        overrides
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a single coordinate
    Convert(ConvertArgs),

    /// Check whether a coordinate falls inside the GCJ-02 region
    Check(PointArgs),

    /// Measure the residual error of a WGS-84 -> GCJ-02 -> WGS-84 round trip
    Roundtrip(PointArgs),

    /// Convert "lng,lat" lines from a file or stdin
    Batch(BatchArgs),

    /// Convert every position of a GeoJSON document
    Geojson(GeojsonArgs),

    /// Look up the address of a WGS-84 coordinate through AMap
    Regeo(RegeoArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

/// Source and target frames; unset values fall back to configuration
#[derive(Args, Debug, Default)]
pub struct FrameArgs {
    /// Frame of the input (wgs84 or gcj02)
    #[arg(long)]
    pub from: Option<CoordFrame>,

    /// Frame of the output (wgs84 or gcj02)
    #[arg(long)]
    pub to: Option<CoordFrame>,
}

#[derive(Parser, Debug)]
pub struct PointArgs {
    /// Longitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,

    /// Latitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Longitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,

    /// Latitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    #[command(flatten)]
    pub frames: FrameArgs,
}

#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Input file with one "lng,lat" per line ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub frames: FrameArgs,
}

#[derive(Parser, Debug)]
pub struct GeojsonArgs {
    /// GeoJSON file to convert
    pub input: PathBuf,

    /// Write the converted document here instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub frames: FrameArgs,
}

#[derive(Parser, Debug)]
pub struct RegeoArgs {
    /// WGS-84 longitude
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,

    /// WGS-84 latitude
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// AMap web-service key (overrides AMAP_KEY)
    #[arg(long, value_name = "KEY")]
    pub amap_key: Option<String>,
}
