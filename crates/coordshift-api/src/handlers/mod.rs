mod bounds;
mod convert;
mod geojson;
mod health;
mod regeo;

pub use self::bounds::check_bounds;
pub use self::convert::{convert_batch, convert_point};
pub use self::geojson::convert_geojson;
pub use self::health::health_check;
pub use self::regeo::reverse_geocode;
