//! Map files: the declarative list of stations and links a network is
//! built from.
//!
//! Maps are JSON documents of the form
//!
//! ```json
//! {
//!   "stations": [{ "name": "Central", "position": { "x": 0.0, "y": 0.0 } }],
//!   "links": [{ "station1": "Central", "station2": "Harbour", "line": "Red" }]
//! }
//! ```

mod demo;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::network::{BuildReport, LinkRecord, StationRecord, build_network};

pub use demo::demo_map;

/// Errors loading a map file.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The file could not be read
    #[error("failed to read map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid map document
    #[error("invalid map {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A map as declared in a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

impl MapConfig {
    /// Load a map from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| MapError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the network described by this map.
    pub fn build(&self) -> BuildReport {
        build_network(&self.stations, &self.links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Line, Position};
    use tempfile::tempdir;

    #[test]
    fn load_map_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("map.json");
        std::fs::write(
            &path,
            r#"{
                "stations": [
                    { "name": "A", "position": { "x": 0, "y": 1 } },
                    { "name": "B", "position": { "x": 2, "y": 3, "z": 4 } }
                ],
                "links": [
                    { "station1": "A", "station2": "B", "line": "Blue" }
                ]
            }"#,
        )
        .unwrap();

        let map = MapConfig::load(&path).unwrap();

        assert_eq!(map.stations.len(), 2);
        assert_eq!(map.stations[0].position, Position::new(0.0, 1.0));
        assert_eq!(map.stations[1].position.z, 4.0);
        assert_eq!(map.links, vec![LinkRecord::new("A", "B", Line::Blue)]);
    }

    #[test]
    fn missing_file() {
        let err = MapConfig::load("/nonexistent/path/map.json").unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read map /nonexistent/path/map.json"));
    }

    #[test]
    fn invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("map.json");
        std::fs::write(&path, r#"{ "stations": [ { "name": 3 } ] }"#).unwrap();

        let err = MapConfig::load(&path).unwrap_err();
        assert!(matches!(err, MapError::Json { .. }));
    }

    #[test]
    fn unknown_line_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("map.json");
        std::fs::write(
            &path,
            r#"{ "links": [ { "station1": "A", "station2": "B", "line": "Purple" } ] }"#,
        )
        .unwrap();

        assert!(matches!(
            MapConfig::load(&path),
            Err(MapError::Json { .. })
        ));
    }

    #[test]
    fn empty_document_is_empty_map() {
        let map: MapConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(map, MapConfig::default());
        assert!(map.build().network.stations.is_empty());
    }

    #[test]
    fn bundled_map_matches_demo() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/metro.json");
        assert_eq!(MapConfig::load(path).unwrap(), demo_map());
    }

    #[test]
    fn build_reports_bad_records() {
        let map = MapConfig {
            stations: vec![
                StationRecord::new("A", 0.0, 0.0),
                StationRecord::new("B", 1.0, 0.0),
            ],
            links: vec![
                LinkRecord::new("A", "B", Line::Red),
                LinkRecord::new("B", "X", Line::Red),
            ],
        };

        let report = map.build();
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.network.graph.link_count(), 1);
    }
}
