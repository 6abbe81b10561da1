use coordshift_core::models::CoordFrame;
use coordshift_core::ports::ReverseGeocoder;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub geocoder: Option<Arc<dyn ReverseGeocoder>>,
    pub default_from: CoordFrame,
    pub default_to: CoordFrame,
}

impl AppState {
    pub fn new(
        geocoder: Option<Arc<dyn ReverseGeocoder>>,
        default_from: CoordFrame,
        default_to: CoordFrame,
    ) -> Self {
        Self { geocoder, default_from, default_to }
    }

    /// State with WGS-84 -> GCJ-02 defaults and no geocoder
    pub fn without_geocoder() -> Self {
        Self::new(None, CoordFrame::Wgs84, CoordFrame::Gcj02)
    }
}
