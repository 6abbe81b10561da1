//! Coordshift Geo - Geometry transforms, offset measurement, and validation
//!
//! This crate lifts the point transform in `coordshift-core` to `geo`
//! geometries and GeoJSON documents, and measures the distances involved.

pub mod models;
pub mod validation;
pub mod transform;
pub mod spatial;
