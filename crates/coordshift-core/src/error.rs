//! Error types for coordshift

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoordshiftError {
    // Frame errors
    #[error("Unknown coordinate frame '{value}'. Use wgs84 or gcj02")]
    InvalidFrame { value: String },

    #[error("Coordinate frame {frame} is not supported. Only wgs84 and gcj02 are implemented")]
    UnsupportedFrame { frame: String },

    // Input errors
    #[error("Invalid coordinate '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },

    // Geocoder errors
    #[error("Geocoder unavailable: {reason}. Try: {remediation}")]
    GeocoderUnavailable {
        reason: String,
        remediation: String,
    },

    #[error("Geocoder rejected the request (status {status}): {info}")]
    GeocoderRejected { status: String, info: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, CoordshiftError>;
