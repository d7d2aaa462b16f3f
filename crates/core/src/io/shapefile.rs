//! Shapefile reading
//!
//! Drains a shapefile container (`.shp` + `.dbf`) into GeoJSON features.
//! Geometry goes through `geo-types` using the shapefile crate's
//! conversions; dBase attributes become JSON properties with sorted keys.
//! Records are yielded in container order and the first per-record error
//! aborts the read.

use crate::error::{Error, Result};
use geo_types::Geometry as GeoGeometry;
use geojson::{Feature, Geometry, JsonObject, Value};
use serde_json::Value as JsonValue;
use shapefile::dbase::{FieldValue, Record};
use shapefile::Shape;
use std::path::Path;

/// Read every record of a shapefile into GeoJSON features, in container order
pub fn read_features<P: AsRef<Path>>(path: P) -> Result<Vec<Feature>> {
    let mut reader = shapefile::Reader::from_path(path.as_ref())?;
    let mut features = Vec::new();

    for record in reader.iter_shapes_and_records() {
        let (shape, attributes) = record?;
        features.push(Feature {
            bbox: None,
            geometry: shape_to_geometry(shape)?,
            id: None,
            properties: Some(attributes_to_properties(attributes)),
            foreign_members: None,
        });
    }

    Ok(features)
}

/// Convert a shapefile shape into a GeoJSON geometry
///
/// Null shapes map to `None` (serialized as `geometry: null`).
/// Single-part multi geometries collapse to their plain variant, so a
/// one-ring shapefile polygon surfaces as `Polygon`, not `MultiPolygon`.
fn shape_to_geometry(shape: Shape) -> Result<Option<Geometry>> {
    let converted: GeoGeometry<f64> = match shape {
        Shape::NullShape => return Ok(None),
        Shape::Multipatch(_) => {
            return Err(Error::UnsupportedGeometry(
                "multipatch has no GeoJSON counterpart".to_string(),
            ))
        }
        other => GeoGeometry::<f64>::try_from(other)
            .map_err(|e| Error::UnsupportedGeometry(e.to_string()))?,
    };
    let collapsed = collapse_single_part(converted);
    Ok(Some(Geometry::new(Value::from(&collapsed))))
}

fn collapse_single_part(geometry: GeoGeometry<f64>) -> GeoGeometry<f64> {
    match geometry {
        GeoGeometry::MultiLineString(mut lines) if lines.0.len() == 1 => {
            GeoGeometry::LineString(lines.0.remove(0))
        }
        GeoGeometry::MultiPolygon(mut polygons) if polygons.0.len() == 1 => {
            GeoGeometry::Polygon(polygons.0.remove(0))
        }
        other => other,
    }
}

/// Convert a dBase record into a GeoJSON properties object
///
/// Keys are sorted so the output is deterministic across runs.
fn attributes_to_properties(record: Record) -> JsonObject {
    let mut fields: Vec<(String, FieldValue)> = record.into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut properties = JsonObject::new();
    for (name, value) in fields {
        properties.insert(name, field_to_json(value));
    }
    properties
}

fn field_to_json(value: FieldValue) -> JsonValue {
    match value {
        FieldValue::Character(v) => v.map(JsonValue::from).unwrap_or(JsonValue::Null),
        FieldValue::Numeric(v) => v.map(JsonValue::from).unwrap_or(JsonValue::Null),
        FieldValue::Float(v) => v
            .map(|f| JsonValue::from(f64::from(f)))
            .unwrap_or(JsonValue::Null),
        FieldValue::Integer(v) => JsonValue::from(v),
        FieldValue::Double(v) => JsonValue::from(v),
        FieldValue::Currency(v) => JsonValue::from(v),
        FieldValue::Logical(v) => v.map(JsonValue::from).unwrap_or(JsonValue::Null),
        FieldValue::Date(v) => match v {
            Some(date) => JsonValue::from(format!(
                "{:04}-{:02}-{:02}",
                date.year(),
                date.month(),
                date.day()
            )),
            None => JsonValue::Null,
        },
        FieldValue::DateTime(v) => JsonValue::from(format!("{:?}", v)),
        FieldValue::Memo(v) => JsonValue::from(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_scalar_mapping() {
        assert_eq!(
            field_to_json(FieldValue::Character(Some("Alpha".to_string()))),
            JsonValue::from("Alpha")
        );
        assert_eq!(field_to_json(FieldValue::Numeric(Some(12.5))), JsonValue::from(12.5));
        assert_eq!(field_to_json(FieldValue::Integer(7)), JsonValue::from(7));
        assert_eq!(field_to_json(FieldValue::Logical(Some(true))), JsonValue::from(true));
        assert_eq!(field_to_json(FieldValue::Character(None)), JsonValue::Null);
        assert_eq!(field_to_json(FieldValue::Numeric(None)), JsonValue::Null);
    }

    #[test]
    fn test_properties_keys_sorted() {
        let mut record = Record::default();
        record.insert("ZONE".to_string(), FieldValue::Integer(2));
        record.insert("AREA".to_string(), FieldValue::Numeric(Some(1.5)));
        record.insert("NAME".to_string(), FieldValue::Character(Some("First".to_string())));

        let properties = attributes_to_properties(record);
        let keys: Vec<&String> = properties.keys().collect();
        assert_eq!(keys, vec!["AREA", "NAME", "ZONE"]);
    }

    #[test]
    fn test_null_shape_has_no_geometry() {
        assert!(shape_to_geometry(Shape::NullShape).unwrap().is_none());
    }
}
