pub mod address;
pub mod frame;
pub mod point;

pub use address::ReverseGeocode;
pub use frame::CoordFrame;
pub use point::GeoPoint;
