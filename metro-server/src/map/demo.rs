//! Built-in sample map, used when no map file is configured.

use crate::network::{Line, LinkRecord, StationRecord};

use super::MapConfig;

/// Fluent builder for small hand-written maps.
#[derive(Debug, Default)]
struct MapBuilder {
    inner: MapConfig,
}

impl MapBuilder {
    fn station(mut self, name: &str, x: f32, y: f32) -> Self {
        self.inner.stations.push(StationRecord::new(name, x, y));
        self
    }

    /// Link consecutive stations of `stops` on `line`.
    fn line(mut self, line: Line, stops: &[&str]) -> Self {
        for pair in stops.windows(2) {
            self.inner
                .links
                .push(LinkRecord::new(pair[0], pair[1], line));
        }
        self
    }

    fn build(self) -> MapConfig {
        self.inner
    }
}

/// A four-line sample network.
///
/// Red and Blue cross at Central, Green and Black share Market and Harbour,
/// and Observatory has no links at all.
pub fn demo_map() -> MapConfig {
    MapBuilder::default()
        .station("Northgate", 0.0, 8.0)
        .station("Museum", 0.0, 4.0)
        .station("Central", 0.0, 0.0)
        .station("Riverside", 0.0, -4.0)
        .station("Southport", 0.0, -8.0)
        .station("Westfield", -8.0, 0.0)
        .station("Park", -4.0, 0.0)
        .station("Market", 4.0, 0.0)
        .station("Harbour", 8.0, 0.0)
        .station("University", 4.0, 6.0)
        .station("Stadium", 8.0, 6.0)
        .station("Airport", 8.0, -6.0)
        .station("Observatory", -8.0, 8.0)
        .line(
            Line::Red,
            &["Northgate", "Museum", "Central", "Riverside", "Southport"],
        )
        .line(Line::Blue, &["Westfield", "Park", "Central", "Market"])
        .line(Line::Green, &["Museum", "University", "Market", "Harbour"])
        .line(Line::Black, &["Stadium", "Harbour", "Airport", "Riverside"])
        .build()
}
