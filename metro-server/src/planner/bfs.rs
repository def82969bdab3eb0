//! Breadth-first shortest path search.
//!
//! Every link costs one hop, so the first time BFS dequeues the destination
//! it has found a path with the fewest possible hops. Neighbours are expanded
//! in ascending id order, which makes the choice between equally short paths
//! deterministic.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::network::{MetroGraph, StationId};

use super::RouteError;

/// A route through the graph as an ordered list of stations.
///
/// Always non-empty. Starts at the requested source, ends at the requested
/// destination, and consecutive stations are adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<StationId>);

impl Path {
    /// Stations along the path, source first.
    pub fn stations(&self) -> &[StationId] {
        &self.0
    }

    /// First station.
    pub fn source(&self) -> StationId {
        self.0[0]
    }

    /// Last station.
    pub fn destination(&self) -> StationId {
        self.0[self.0.len() - 1]
    }

    /// Number of links travelled.
    pub fn hops(&self) -> usize {
        self.0.len() - 1
    }

    /// The same path travelled the other way.
    pub fn reversed(&self) -> Path {
        Path(self.0.iter().rev().copied().collect())
    }
}

/// Find the path with the fewest hops from `source` to `destination`.
///
/// Returns `Ok(None)` when the destination cannot be reached, and
/// `RouteError::UnknownStation` when either endpoint is not in the graph.
pub fn find_path(
    graph: &MetroGraph,
    source: StationId,
    destination: StationId,
) -> Result<Option<Path>, RouteError> {
    for id in [source, destination] {
        if !graph.contains(id) {
            return Err(RouteError::UnknownStation(id));
        }
    }

    // Predecessor of every discovered station except the source
    let mut previous: HashMap<StationId, StationId> = HashMap::new();
    let mut queue = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        if current == destination {
            return Ok(Some(build_path(&previous, source, destination)));
        }

        let Some(neighbours) = graph.neighbours(current) else {
            continue;
        };

        for neighbour in neighbours {
            if neighbour == source || previous.contains_key(&neighbour) {
                continue;
            }
            trace!(from = %current, to = %neighbour, "Discovered station");
            previous.insert(neighbour, current);
            queue.push_back(neighbour);
        }
    }

    Ok(None)
}

/// Walk predecessors back from the destination, then reverse.
fn build_path(
    previous: &HashMap<StationId, StationId>,
    source: StationId,
    destination: StationId,
) -> Path {
    let mut stations = vec![destination];
    let mut current = destination;

    while current != source {
        match previous.get(&current) {
            Some(&before) => {
                stations.push(before);
                current = before;
            }
            // Every dequeued station other than the source has a predecessor
            None => break,
        }
    }

    stations.reverse();
    Path(stations)
}
