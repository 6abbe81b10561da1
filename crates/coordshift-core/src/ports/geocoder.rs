use crate::error::Result;
use crate::models::{CoordFrame, GeoPoint, ReverseGeocode};
use async_trait::async_trait;

/// Port for address lookup by coordinate
///
/// Callers always pass WGS-84. Adapters for providers working in another
/// frame convert before sending the request.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Resolve a WGS-84 coordinate to an address
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<ReverseGeocode>;

    /// Provider name reported in results
    fn provider_name(&self) -> &str;

    /// Frame the provider expects coordinates in
    fn frame(&self) -> CoordFrame;
}
