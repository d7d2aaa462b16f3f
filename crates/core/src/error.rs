//! Error types for GeoSlim

use thiserror::Error;

/// Main error type for GeoSlim operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),

    #[error("GeoJSON error: {0}")]
    Geojson(#[from] geojson::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),
}

/// Result type alias for GeoSlim operations
pub type Result<T> = std::result::Result<T, Error>;
