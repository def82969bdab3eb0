//! Builds a [`Network`] from declarative station and link records.
//!
//! Bad records never stop the build: each one is reported as a
//! [`BuildDiagnostic`], logged, and skipped.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::graph::{LinkOutcome, MetroGraph};
use super::{Line, Network, Position, Station, StationId, StationIndex};

/// A station as declared in a map file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub name: String,
    #[serde(default)]
    pub position: Position,
}

impl StationRecord {
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
        }
    }
}

/// A link between two named stations, as declared in a map file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub station1: String,
    pub station2: String,
    pub line: Line,
}

impl LinkRecord {
    pub fn new(station1: impl Into<String>, station2: impl Into<String>, line: Line) -> Self {
        Self {
            station1: station1.into(),
            station2: station2.into(),
            line,
        }
    }
}

/// A problem found in the map data. The offending record was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildDiagnostic {
    /// A station name was declared more than once
    #[error("station {name} already exists (record {index} ignored, keeping {kept})")]
    DuplicateStation {
        name: String,
        index: usize,
        kept: StationId,
    },

    /// A station record has an empty name
    #[error("station record {index} has a blank name and was ignored")]
    BlankStationName { index: usize },

    /// A link refers to a station that was never declared
    #[error("link {link} between {station1} and {station2} ignored: there is no station {missing}")]
    UnknownStation {
        link: usize,
        station1: String,
        station2: String,
        missing: String,
    },

    /// A link connects a station to itself
    #[error("link {link} connects {station} to itself and was ignored")]
    SelfLink { link: usize, station: String },

    /// A pair of stations was linked again on a different line
    #[error("link {link} between {station1} and {station2} on {ignored} ignored: already linked on {kept}")]
    ConflictingLine {
        link: usize,
        station1: String,
        station2: String,
        kept: Line,
        ignored: Line,
    },
}

/// Result of building a network: the network plus everything that was skipped.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub network: Network,
    pub diagnostics: Vec<BuildDiagnostic>,
}

impl BuildReport {
    /// Whether every record was used.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Build a network from station and link records.
///
/// Station ids are the position of each record in `stations`. Stations
/// without links are still part of the graph, with no neighbours.
pub fn build_network(stations: &[StationRecord], links: &[LinkRecord]) -> BuildReport {
    let mut diagnostics = Vec::new();
    let mut index = StationIndex::new();
    let mut graph = MetroGraph::new();

    for (i, record) in stations.iter().enumerate() {
        if record.name.trim().is_empty() {
            report(&mut diagnostics, BuildDiagnostic::BlankStationName { index: i });
            continue;
        }

        let station = Station {
            id: StationId(i),
            name: record.name.clone(),
            position: record.position,
        };

        match index.insert(station) {
            Ok(()) => graph.add_station(StationId(i)),
            Err(kept) => report(
                &mut diagnostics,
                BuildDiagnostic::DuplicateStation {
                    name: record.name.clone(),
                    index: i,
                    kept,
                },
            ),
        }
    }

    for (i, link) in links.iter().enumerate() {
        let a = index.id_of(&link.station1);
        let b = index.id_of(&link.station2);

        let (a, b) = match (a, b) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                // One diagnostic per missing endpoint
                for (name, id) in [(&link.station1, a), (&link.station2, b)] {
                    if id.is_none() {
                        report(
                            &mut diagnostics,
                            BuildDiagnostic::UnknownStation {
                                link: i,
                                station1: link.station1.clone(),
                                station2: link.station2.clone(),
                                missing: name.clone(),
                            },
                        );
                    }
                }
                continue;
            }
        };

        if a == b {
            report(
                &mut diagnostics,
                BuildDiagnostic::SelfLink {
                    link: i,
                    station: link.station1.clone(),
                },
            );
            continue;
        }

        match graph.link(a, b, link.line) {
            LinkOutcome::Added => {}
            LinkOutcome::AlreadyLinked(kept) if kept == link.line => {
                debug!(
                    link = i,
                    station1 = %link.station1,
                    station2 = %link.station2,
                    "Duplicate link ignored"
                );
            }
            LinkOutcome::AlreadyLinked(kept) => report(
                &mut diagnostics,
                BuildDiagnostic::ConflictingLine {
                    link: i,
                    station1: link.station1.clone(),
                    station2: link.station2.clone(),
                    kept,
                    ignored: link.line,
                },
            ),
        }
    }

    debug!(
        stations = index.len(),
        links = graph.link_count(),
        skipped = diagnostics.len(),
        "Network built"
    );

    BuildReport {
        network: Network {
            stations: index,
            graph,
        },
        diagnostics,
    }
}

fn report(diagnostics: &mut Vec<BuildDiagnostic>, diagnostic: BuildDiagnostic) {
    warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}
