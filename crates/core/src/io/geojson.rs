//! GeoJSON FeatureCollection reading/writing
//!
//! Pretty output is 2-space indented; minified output has no added
//! whitespace. Both go through buffered file handles that are flushed
//! before returning.

use crate::error::Result;
use geojson::{FeatureCollection, GeoJson};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read a GeoJSON file into a FeatureCollection
///
/// Fails if the file is missing, is not valid JSON, or is not a
/// FeatureCollection document.
pub fn read_feature_collection<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    let file = File::open(path.as_ref())?;
    let geojson = GeoJson::from_reader(BufReader::new(file))?;
    Ok(FeatureCollection::try_from(geojson)?)
}

/// Write a FeatureCollection to a file, overwriting any existing file
///
/// # Arguments
/// * `collection` - FeatureCollection to serialize
/// * `path` - Output path
/// * `pretty` - 2-space indentation when true, minified otherwise
pub fn write_feature_collection<P: AsRef<Path>>(
    collection: &FeatureCollection,
    path: P,
    pretty: bool,
) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, collection)?;
    } else {
        serde_json::to_writer(&mut writer, collection)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Feature, Geometry, JsonObject, Value};

    fn sample_collection() -> FeatureCollection {
        let geometry = Geometry::new(Value::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        ]]));
        let mut properties = JsonObject::new();
        properties.insert("NAME".to_string(), "District 1".into());
        FeatureCollection {
            bbox: None,
            features: vec![Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }],
            foreign_members: None,
        }
    }

    #[test]
    fn test_round_trip_pretty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.geojson");
        let collection = sample_collection();

        write_feature_collection(&collection, &path, true).unwrap();
        let read = read_feature_collection(&path).unwrap();

        assert_eq!(read.features.len(), 1);
        assert_eq!(read.features[0].geometry, collection.features[0].geometry);
        assert_eq!(read.features[0].properties, collection.features[0].properties);
    }

    #[test]
    fn test_round_trip_minified() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.geojson");
        let collection = sample_collection();

        write_feature_collection(&collection, &path, false).unwrap();
        let read = read_feature_collection(&path).unwrap();

        assert_eq!(read.features.len(), 1);
        assert_eq!(read.features[0].geometry, collection.features[0].geometry);
    }

    #[test]
    fn test_minified_smaller_than_pretty() {
        let dir = tempfile::tempdir().unwrap();
        let pretty_path = dir.path().join("pretty.geojson");
        let minified_path = dir.path().join("minified.geojson");
        let collection = sample_collection();

        write_feature_collection(&collection, &pretty_path, true).unwrap();
        write_feature_collection(&collection, &minified_path, false).unwrap();

        let pretty_size = std::fs::metadata(&pretty_path).unwrap().len();
        let minified_size = std::fs::metadata(&minified_path).unwrap().len();
        assert!(
            minified_size < pretty_size,
            "minified {} should be smaller than pretty {}",
            minified_size,
            pretty_size
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_feature_collection("no/such/file.geojson").is_err());
    }
}
