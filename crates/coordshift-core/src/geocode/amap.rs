use crate::config::LayeredConfig;
use crate::error::{CoordshiftError, Result};
use crate::models::{CoordFrame, GeoPoint, ReverseGeocode};
use crate::ports::ReverseGeocoder;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

const PROVIDER: &str = "amap";

/// AMap (Gaode) reverse geocoder
///
/// AMap works in GCJ-02, so the WGS-84 input is shifted before the request
/// is built.
pub struct AmapGeocoder {
    /// Base URL for the AMap web service (e.g., "https://restapi.amap.com")
    base_url: String,

    /// Web-service key
    key: String,

    /// Search radius in meters
    radius: u32,

    /// HTTP client
    client: reqwest::Client,
}

impl AmapGeocoder {
    /// Create a new AMap geocoder
    pub fn new(base_url: impl Into<String>, key: impl Into<String>, radius: u32) -> Self {
        Self {
            base_url: base_url.into(),
            key: key.into(),
            radius,
            client: reqwest::Client::new(),
        }
    }

    /// Create from layered configuration; fails when no key is configured
    pub fn from_config(config: &LayeredConfig) -> Result<Self> {
        let key = config
            .amap_key
            .value
            .clone()
            .ok_or_else(|| CoordshiftError::ConfigMissing { key: "amap_key".to_string() })?;

        Ok(Self::new(config.amap_base_url.value.clone(), key, config.regeo_radius.value))
    }

    /// Build the regeo request URL for a GCJ-02 location
    pub fn request_url(&self, location: GeoPoint) -> Result<Url> {
        let endpoint = format!("{}/v3/geocode/regeo", self.base_url.trim_end_matches('/'));
        let params = [
            ("output", "json".to_string()),
            ("location", format!("{:.6}", location)),
            ("key", self.key.clone()),
            ("radius", self.radius.to_string()),
            ("extensions", "all".to_string()),
        ];

        Url::parse_with_params(&endpoint, &params).map_err(|e| CoordshiftError::ConfigInvalid {
            key: "amap_base_url".to_string(),
            reason: format!("Invalid AMap URL '{}': {}", endpoint, e),
        })
    }
}

#[async_trait]
impl ReverseGeocoder for AmapGeocoder {
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<ReverseGeocode> {
        let location = point.to_gcj02();
        let url = self.request_url(location)?;

        tracing::debug!(wgs84 = %point, gcj02 = %location, "Requesting AMap reverse geocode");

        let response = self.client.get(url).send().await.map_err(|e| {
            CoordshiftError::GeocoderUnavailable {
                reason: format!("Failed to connect to AMap: {}", e),
                remediation: format!(
                    "Check network access to {} or point amap_base_url at a reachable endpoint",
                    self.base_url
                ),
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoordshiftError::GeocoderUnavailable {
                reason: format!("AMap API error ({}): {}", status, error_text),
                remediation: "Retry later or check the AMap service status".to_string(),
            });
        }

        let body = response.text().await.map_err(|e| CoordshiftError::GeocoderUnavailable {
            reason: format!("Failed to read AMap response: {}", e),
            remediation: "Retry the request".to_string(),
        })?;

        let formatted_address = parse_regeo_response(&body)?;

        Ok(ReverseGeocode {
            formatted_address,
            provider: PROVIDER.to_string(),
            query_point: location,
            frame: CoordFrame::Gcj02,
        })
    }

    fn provider_name(&self) -> &str {
        PROVIDER
    }

    fn frame(&self) -> CoordFrame {
        CoordFrame::Gcj02
    }
}

/// Response from the AMap regeo API
#[derive(Debug, Deserialize)]
struct AmapRegeoResponse {
    status: String,
    #[serde(default)]
    info: String,
    regeocode: Option<AmapRegeocode>,
}

#[derive(Debug, Deserialize)]
struct AmapRegeocode {
    // A string, or `[]` when AMap has no address for the location
    #[serde(default)]
    formatted_address: serde_json::Value,
}

/// Extract the formatted address from a regeo response body
fn parse_regeo_response(body: &str) -> Result<String> {
    let response: AmapRegeoResponse = serde_json::from_str(body).map_err(|e| {
        CoordshiftError::GeocoderUnavailable {
            reason: format!("Failed to parse AMap response: {}", e),
            remediation: "Check AMap API compatibility".to_string(),
        }
    })?;

    if response.status != "1" {
        return Err(CoordshiftError::GeocoderRejected {
            status: response.status,
            info: response.info,
        });
    }

    let regeocode = response.regeocode.ok_or_else(|| CoordshiftError::GeocoderRejected {
        status: response.status.clone(),
        info: "response has no regeocode".to_string(),
    })?;

    Ok(regeocode.formatted_address.as_str().unwrap_or_default().to_string())
}
