//! Station types and the name lookup table.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a station within a built network.
///
/// Ids are the 0-based position of the station record in the map file, so a
/// network built from a list containing skipped records can have gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub usize);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point on the map.
///
/// Map files usually give only `x` and `y`; `z` defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Position {
    /// Creates a position on the map plane.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// A named station.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub position: Position,
}

/// All stations of a network, addressable by id or by name.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    by_id: BTreeMap<StationId, Station>,
    by_name: HashMap<String, StationId>,
}

impl StationIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station.
    ///
    /// Returns the id already registered for the name if there is one; the
    /// index is left untouched in that case.
    pub(crate) fn insert(&mut self, station: Station) -> Result<(), StationId> {
        if let Some(existing) = self.by_name.get(&station.name) {
            return Err(*existing);
        }
        self.by_name.insert(station.name.clone(), station.id);
        self.by_id.insert(station.id, station);
        Ok(())
    }

    /// Look up a station id by its display name.
    pub fn id_of(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// Look up a station by id.
    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.by_id.get(&id)
    }

    /// Display name of a station, if known.
    pub fn name_of(&self, id: StationId) -> Option<&str> {
        self.by_id.get(&id).map(|s| s.name.as_str())
    }

    /// Stations in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.by_id.values()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the index holds no stations.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
