//! Feature-collection optimization pass
//!
//! Walks every feature of a FeatureCollection, reduces coordinate
//! precision everywhere, and optionally simplifies the rings of
//! Polygon and MultiPolygon geometries. Properties pass through
//! unmodified.

use crate::precision::reduce_value;
use crate::simplify::simplify_ring;
use geojson::{Feature, FeatureCollection, Value};

/// Parameters for the optimization pass
#[derive(Debug, Clone)]
pub struct OptimizeParams {
    /// Decimal digits kept in every ordinate (default 5)
    pub precision: u32,
    /// Simplify Polygon/MultiPolygon rings (default false)
    pub simplify: bool,
    /// Perpendicular-distance tolerance for simplification (default 1e-4)
    pub tolerance: f64,
    /// Serialize without whitespace (default true); consumed at write time
    pub minify: bool,
}

impl Default for OptimizeParams {
    fn default() -> Self {
        Self {
            precision: 5,
            simplify: false,
            tolerance: 1e-4,
            minify: true,
        }
    }
}

/// Counters reported after an optimization pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimizeStats {
    /// Leaf positions visited during precision reduction
    pub positions_in: usize,
    /// Leaf positions remaining after simplification
    pub positions_out: usize,
}

/// Optimize every feature of a collection in place
pub fn optimize_collection(
    collection: &mut FeatureCollection,
    params: &OptimizeParams,
) -> OptimizeStats {
    let mut stats = OptimizeStats::default();
    for feature in &mut collection.features {
        let feature_stats = optimize_feature(feature, params);
        stats.positions_in += feature_stats.positions_in;
        stats.positions_out += feature_stats.positions_out;
    }
    stats
}

/// Optimize a single feature in place
///
/// Precision reduction applies to every geometry tag; ring
/// simplification applies only to Polygon and MultiPolygon, on the
/// already-reduced coordinates. Other tags, including the members of a
/// GeometryCollection, are never simplified. Features without geometry
/// pass through untouched.
pub fn optimize_feature(feature: &mut Feature, params: &OptimizeParams) -> OptimizeStats {
    let geometry = match feature.geometry.as_mut() {
        Some(geometry) => geometry,
        None => return OptimizeStats::default(),
    };

    let (reduced, positions_in) = reduce_value(&geometry.value, params.precision);

    let value = if params.simplify {
        match reduced {
            Value::Polygon(rings) => Value::Polygon(simplify_rings(&rings, params.tolerance)),
            Value::MultiPolygon(polygons) => Value::MultiPolygon(
                polygons
                    .iter()
                    .map(|rings| simplify_rings(rings, params.tolerance))
                    .collect(),
            ),
            other => other,
        }
    } else {
        reduced
    };

    let positions_out = count_positions(&value);
    geometry.value = value;

    OptimizeStats {
        positions_in,
        positions_out,
    }
}

fn simplify_rings(rings: &[Vec<Vec<f64>>], tolerance: f64) -> Vec<Vec<Vec<f64>>> {
    rings.iter().map(|ring| simplify_ring(ring, tolerance)).collect()
}

fn count_positions(value: &Value) -> usize {
    match value {
        Value::Point(_) => 1,
        Value::MultiPoint(points) => points.len(),
        Value::LineString(line) => line.len(),
        Value::MultiLineString(lines) => lines.iter().map(Vec::len).sum(),
        Value::Polygon(rings) => rings.iter().map(Vec::len).sum(),
        Value::MultiPolygon(polygons) => polygons.iter().flatten().map(Vec::len).sum(),
        Value::GeometryCollection(geometries) => geometries
            .iter()
            .map(|geometry| count_positions(&geometry.value))
            .sum(),
    }
}
