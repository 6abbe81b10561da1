//! Request and response bodies

pub mod request;
pub mod response;

pub use request::{BatchConvertRequest, ConvertQuery, FrameQuery, PointQuery};
pub use response::{BatchConvertResponse, BoundsCheckResponse, ConvertResponse, HealthResponse};
