//! Coordinate precision reduction
//!
//! Rounds every ordinate of a geometry to a fixed number of decimal
//! digits. Five digits keep roughly one metre of accuracy at the
//! equator, which is plenty for display-scale boundary data while
//! cutting the serialized size considerably.
//!
//! The recursion is an explicit descent keyed on the geometry tag, so
//! each variant owns its nesting depth and no runtime inspection of
//! array contents is needed.

use geojson::{Geometry, Value};

/// Round a single ordinate to `precision` decimal digits
///
/// Rounds half away from zero; the result stays a plain number, so
/// trailing zeros are not preserved. A precision of 0 rounds to whole
/// numbers.
pub fn round_ordinate(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Round every ordinate of a position
///
/// Works for 2D and 3D positions; an empty position comes back empty.
pub fn reduce_position(position: &[f64], precision: u32) -> Vec<f64> {
    position.iter().map(|&v| round_ordinate(v, precision)).collect()
}

/// Reduce the precision of every position in a geometry value
///
/// Returns a new value of identical shape plus the number of leaf
/// positions visited. The input is not mutated, and applying the
/// reduction twice with the same precision is idempotent.
pub fn reduce_value(value: &Value, precision: u32) -> (Value, usize) {
    match value {
        Value::Point(position) => (Value::Point(reduce_position(position, precision)), 1),
        Value::MultiPoint(points) => {
            let count = points.len();
            (Value::MultiPoint(reduce_line(points, precision)), count)
        }
        Value::LineString(line) => {
            let count = line.len();
            (Value::LineString(reduce_line(line, precision)), count)
        }
        Value::MultiLineString(lines) => {
            let count = lines.iter().map(Vec::len).sum();
            (Value::MultiLineString(reduce_rings(lines, precision)), count)
        }
        Value::Polygon(rings) => {
            let count = rings.iter().map(Vec::len).sum();
            (Value::Polygon(reduce_rings(rings, precision)), count)
        }
        Value::MultiPolygon(polygons) => {
            let count = polygons.iter().flatten().map(Vec::len).sum();
            let reduced = polygons
                .iter()
                .map(|rings| reduce_rings(rings, precision))
                .collect();
            (Value::MultiPolygon(reduced), count)
        }
        Value::GeometryCollection(geometries) => {
            let mut total = 0;
            let reduced = geometries
                .iter()
                .map(|geometry| {
                    let (value, count) = reduce_value(&geometry.value, precision);
                    total += count;
                    Geometry {
                        bbox: geometry.bbox.clone(),
                        value,
                        foreign_members: geometry.foreign_members.clone(),
                    }
                })
                .collect();
            (Value::GeometryCollection(reduced), total)
        }
    }
}

fn reduce_line(line: &[Vec<f64>], precision: u32) -> Vec<Vec<f64>> {
    line.iter()
        .map(|position| reduce_position(position, precision))
        .collect()
}

fn reduce_rings(rings: &[Vec<Vec<f64>>], precision: u32) -> Vec<Vec<Vec<f64>>> {
    rings.iter().map(|ring| reduce_line(ring, precision)).collect()
}
