//! The metro network: stations, lines and the graph linking them.
//!
//! A [`Network`] is built once from map records by [`build_network`] and is
//! read-only afterwards. Route queries borrow it.

mod builder;
mod graph;
mod line;
mod station;

pub use builder::{BuildDiagnostic, BuildReport, LinkRecord, StationRecord, build_network};
pub use graph::{LinkOutcome, MetroGraph};
pub use line::{Line, UnknownLine};
pub use station::{Position, Station, StationId, StationIndex};

/// A built network: station lookup plus the labelled graph.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub stations: StationIndex,
    pub graph: MetroGraph,
}

impl Network {
    /// Resolve a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations
            .id_of(name)
            .and_then(|id| self.stations.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_by_name() {
        let report = build_network(
            &[
                StationRecord::new("Central", 0.0, 0.0),
                StationRecord::new("Harbour", 4.0, 0.0),
            ],
            &[LinkRecord::new("Central", "Harbour", Line::Blue)],
        );
        let network = report.network;

        let harbour = network.station("Harbour").unwrap();
        assert_eq!(harbour.id, StationId(1));
        assert_eq!(harbour.position, Position::new(4.0, 0.0));
        assert!(network.station("Nowhere").is_none());
    }
}
