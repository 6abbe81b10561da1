use crate::error::{CoordshiftError, Result};
use crate::models::CoordFrame;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default AMap web-service endpoint
pub const DEFAULT_AMAP_BASE_URL: &str = "https://restapi.amap.com";

/// Largest number of decimals accepted for output precision
pub const MAX_PRECISION: usize = 15;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for coordshift
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub default_from: ConfigValue<CoordFrame>,
    pub default_to: ConfigValue<CoordFrame>,
    pub precision: ConfigValue<usize>,
    pub amap_key: ConfigValue<Option<String>>,
    pub amap_base_url: ConfigValue<String>,
    pub regeo_radius: ConfigValue<u32>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            default_from: ConfigValue::new(CoordFrame::Wgs84, ConfigSource::Default),
            default_to: ConfigValue::new(CoordFrame::Gcj02, ConfigSource::Default),
            precision: ConfigValue::new(6, ConfigSource::Default),
            amap_key: ConfigValue::new(None, ConfigSource::Default),
            amap_base_url: ConfigValue::new(
                DEFAULT_AMAP_BASE_URL.to_string(),
                ConfigSource::Default,
            ),
            regeo_radius: ConfigValue::new(1000, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| CoordshiftError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| CoordshiftError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        // Frames go through `FromStr` so files accept the same aliases as
        // the environment and command line
        if let Some(from) = file_config.default_from {
            self.default_from.update(from.parse()?, ConfigSource::File);
        }

        if let Some(to) = file_config.default_to {
            self.default_to.update(to.parse()?, ConfigSource::File);
        }

        if let Some(precision) = file_config.precision {
            if precision > MAX_PRECISION {
                return Err(CoordshiftError::ConfigInvalid {
                    key: "precision".to_string(),
                    reason: format!("Invalid precision: {}. Use an integer from 0 to 15", precision),
                });
            }
            self.precision.update(precision, ConfigSource::File);
        }

        if let Some(key) = file_config.amap_key {
            self.amap_key.update(Some(key), ConfigSource::File);
        }

        if let Some(base_url) = file_config.amap_base_url {
            self.amap_base_url.update(base_url, ConfigSource::File);
        }

        if let Some(radius) = file_config.regeo_radius {
            self.regeo_radius.update(radius, ConfigSource::File);
        }

        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration file");

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // COORDSHIFT_FROM
        if let Ok(frame_str) = env::var("COORDSHIFT_FROM") {
            match frame_str.parse::<CoordFrame>() {
                Ok(frame) => self.default_from.update(frame, ConfigSource::Environment),
                Err(e) => tracing::warn!("Ignoring COORDSHIFT_FROM: {}", e),
            }
        }

        // COORDSHIFT_TO
        if let Ok(frame_str) = env::var("COORDSHIFT_TO") {
            match frame_str.parse::<CoordFrame>() {
                Ok(frame) => self.default_to.update(frame, ConfigSource::Environment),
                Err(e) => tracing::warn!("Ignoring COORDSHIFT_TO: {}", e),
            }
        }

        // COORDSHIFT_PRECISION
        if let Ok(precision_str) = env::var("COORDSHIFT_PRECISION") {
            match parse_precision(&precision_str) {
                Ok(precision) => self.precision.update(precision, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid COORDSHIFT_PRECISION value '{}': expected an integer from 0 to 15",
                    precision_str
                ),
            }
        }

        // COORDSHIFT_AMAP_KEY wins over the bare AMAP_KEY
        let amap_key = ["COORDSHIFT_AMAP_KEY", "AMAP_KEY"].iter().find_map(|name| {
            match env::var(name) {
                Ok(key) if !key.trim().is_empty() => Some(key),
                Ok(_) => {
                    tracing::warn!("Ignoring empty {}", name);
                    None
                }
                Err(_) => None,
            }
        });
        if let Some(key) = amap_key {
            self.amap_key.update(Some(key), ConfigSource::Environment);
        }

        // COORDSHIFT_AMAP_URL
        if let Ok(base_url) = env::var("COORDSHIFT_AMAP_URL") {
            self.amap_base_url.update(base_url, ConfigSource::Environment);
        }

        // COORDSHIFT_REGEO_RADIUS
        if let Ok(radius_str) = env::var("COORDSHIFT_REGEO_RADIUS") {
            match radius_str.parse::<u32>() {
                Ok(radius) => self.regeo_radius.update(radius, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid COORDSHIFT_REGEO_RADIUS value '{}': expected radius in meters",
                    radius_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(from) = overrides.default_from {
            self.default_from.update(from, ConfigSource::Cli);
        }

        if let Some(to) = overrides.default_to {
            self.default_to.update(to, ConfigSource::Cli);
        }

        if let Some(precision) = overrides.precision {
            self.precision.update(precision, ConfigSource::Cli);
        }

        if let Some(key) = overrides.amap_key {
            self.amap_key.update(Some(key), ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "default_from".to_string(),
            (self.default_from.value.to_string(), self.default_from.source),
        );

        map.insert(
            "default_to".to_string(),
            (self.default_to.value.to_string(), self.default_to.source),
        );

        map.insert(
            "precision".to_string(),
            (self.precision.value.to_string(), self.precision.source),
        );

        map.insert(
            "amap_key".to_string(),
            (mask_secret(self.amap_key.value.as_deref()), self.amap_key.source),
        );

        map.insert(
            "amap_base_url".to_string(),
            (self.amap_base_url.value.clone(), self.amap_base_url.source),
        );

        map.insert(
            "regeo_radius".to_string(),
            (format!("{}m", self.regeo_radius.value), self.regeo_radius.source),
        );

        map
    }
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    default_from: Option<String>,
    default_to: Option<String>,
    precision: Option<usize>,
    amap_key: Option<String>,
    amap_base_url: Option<String>,
    regeo_radius: Option<u32>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub default_from: Option<CoordFrame>,
    pub default_to: Option<CoordFrame>,
    pub precision: Option<usize>,
    pub amap_key: Option<String>,
}

/// Parse an output precision (number of decimals)
pub fn parse_precision(s: &str) -> Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(p) if p <= MAX_PRECISION => Ok(p),
        _ => Err(CoordshiftError::ConfigInvalid {
            key: "precision".to_string(),
            reason: format!("Invalid precision: {}. Use an integer from 0 to 15", s),
        }),
    }
}

/// Mask a secret for display, keeping the last four characters
fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        None => "(not set)".to_string(),
        Some(s) if s.chars().count() <= 4 => "****".to_string(),
        Some(s) => {
            let tail: String = s.chars().skip(s.chars().count() - 4).collect();
            format!("****{}", tail)
        }
    }
}
