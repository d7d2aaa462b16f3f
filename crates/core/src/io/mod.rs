//! I/O operations for reading and writing geospatial data

mod geojson;
mod shapefile;

pub use self::geojson::{read_feature_collection, write_feature_collection};
pub use self::shapefile::read_features;
