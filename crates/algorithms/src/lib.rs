//! # GeoSlim Algorithms
//!
//! Coordinate-processing algorithms for GeoJSON feature collections:
//! - `precision`: round every ordinate to a fixed number of decimal digits
//! - `simplify`: single-pass perpendicular-distance ring decimation
//! - `optimize`: the feature-traversal pass tying the two together

pub mod optimize;
pub mod precision;
pub mod simplify;

pub use optimize::{optimize_collection, optimize_feature, OptimizeParams, OptimizeStats};
pub use precision::{reduce_position, reduce_value, round_ordinate};
pub use simplify::simplify_ring;
