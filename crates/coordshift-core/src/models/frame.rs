use crate::error::{CoordshiftError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic reference frame a coordinate is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoordFrame {
    /// World Geodetic System 1984, as reported by GPS receivers
    #[default]
    Wgs84,
    /// Obfuscated frame required by mapping services in mainland China
    Gcj02,
}

impl CoordFrame {
    /// Canonical lowercase name, as used in config files and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordFrame::Wgs84 => "wgs84",
            CoordFrame::Gcj02 => "gcj02",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            CoordFrame::Wgs84 => "WGS-84",
            CoordFrame::Gcj02 => "GCJ-02",
        }
    }
}

impl fmt::Display for CoordFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordFrame {
    type Err = CoordshiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "wgs84" | "wgs-84" | "gps" | "epsg:4326" => Ok(CoordFrame::Wgs84),
            "gcj02" | "gcj-02" | "mars" | "amap" | "gaode" => Ok(CoordFrame::Gcj02),
            "bd09" | "bd-09" | "baidu" => {
                Err(CoordshiftError::UnsupportedFrame { frame: "BD-09".to_string() })
            }
            _ => Err(CoordshiftError::InvalidFrame { value: s.to_string() }),
        }
    }
}
