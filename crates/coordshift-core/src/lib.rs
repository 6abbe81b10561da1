//! Coordshift Core - Coordinate models, frame transforms, and configuration
//!
//! This crate contains the WGS-84 / GCJ-02 transform together with the
//! domain models and port definitions shared by the other coordshift crates.

pub mod config;
pub mod error;
pub mod geocode;
pub mod models;
pub mod ports;
pub mod transform;

pub use error::{CoordshiftError, Result};
pub use models::{CoordFrame, GeoPoint, ReverseGeocode};
pub use transform::{convert, gcj02_to_wgs84, is_out_of_china, wgs84_to_gcj02};
