//! Reverse-geocoding adapters

pub mod amap;

pub use amap::AmapGeocoder;
