use crate::models::{CoordFrame, GeoPoint};
use serde::{Deserialize, Serialize};

/// Result of a reverse-geocoding lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocode {
    /// Address line as returned by the provider (may be empty)
    pub formatted_address: String,

    /// Provider that answered the lookup
    pub provider: String,

    /// Coordinate that was sent to the provider
    pub query_point: GeoPoint,

    /// Frame of `query_point`
    pub frame: CoordFrame,
}
