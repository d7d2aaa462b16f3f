//! # GeoSlim Core
//!
//! Core error handling and I/O for the GeoSlim pipeline.
//!
//! This crate provides:
//! - `Error`/`Result`: error types shared by all crates
//! - Shapefile reading into GeoJSON features
//! - GeoJSON FeatureCollection reading and writing

pub mod error;
pub mod io;

pub use error::{Error, Result};
