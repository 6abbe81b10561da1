use std::env;

use coordshift_core::config::LayeredConfig;
use coordshift_core::Result;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub converter: LayeredConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables
    ///
    /// `COORDSHIFT_CONFIG` may name a TOML file; environment variables still
    /// take precedence over it.
    pub fn from_env() -> Result<Self> {
        let port = env::var("COORDSHIFT_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3001);

        let cors_origin = env::var("COORDSHIFT_CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let mut converter = LayeredConfig::with_defaults();
        if let Ok(path) = env::var("COORDSHIFT_CONFIG") {
            converter = converter.load_from_file(path)?;
        }
        let converter = converter.load_from_env();

        Ok(Self { port, cors_origin, converter })
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Check if reverse geocoding can be enabled
    pub fn has_geocoder(&self) -> bool {
        self.converter.amap_key.value.is_some()
    }
}
