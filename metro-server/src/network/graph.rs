//! Station adjacency with per-link line labels.
//!
//! Links are undirected: both directions are always stored together, so a
//! lookup from either end finds the same line.

use std::collections::{BTreeMap, BTreeSet};

use super::{Line, StationId};

/// Outcome of adding a link to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The pair was not linked before.
    Added,
    /// The pair was already linked; the existing line is kept.
    AlreadyLinked(Line),
}

/// The metro network as an undirected graph.
///
/// `adjacency` and `lines` always have the same keys, and for each key the
/// same neighbour set. Neighbour sets are ordered, so traversals visit
/// neighbours in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct MetroGraph {
    adjacency: BTreeMap<StationId, BTreeSet<StationId>>,
    lines: BTreeMap<StationId, BTreeMap<StationId, Line>>,
}

impl MetroGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station with no links. Idempotent.
    pub fn add_station(&mut self, id: StationId) {
        self.adjacency.entry(id).or_default();
        self.lines.entry(id).or_default();
    }

    /// Link two stations on a line.
    ///
    /// Both endpoints are registered if needed. When the pair is already
    /// linked, the first line recorded wins and the graph is unchanged.
    pub fn link(&mut self, a: StationId, b: StationId, line: Line) -> LinkOutcome {
        self.add_station(a);
        self.add_station(b);

        if let Some(existing) = self.line_between(a, b) {
            return LinkOutcome::AlreadyLinked(existing);
        }

        for (from, to) in [(a, b), (b, a)] {
            if let Some(neighbours) = self.adjacency.get_mut(&from) {
                neighbours.insert(to);
            }
            if let Some(labels) = self.lines.get_mut(&from) {
                labels.entry(to).or_insert(line);
            }
        }

        LinkOutcome::Added
    }

    /// Whether the station is part of the graph.
    pub fn contains(&self, id: StationId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Neighbours of a station in ascending id order.
    ///
    /// Returns `None` for a station that is not in the graph.
    pub fn neighbours(&self, id: StationId) -> Option<impl Iterator<Item = StationId> + '_> {
        self.adjacency.get(&id).map(|set| set.iter().copied())
    }

    /// The line linking two stations, if they are adjacent.
    pub fn line_between(&self, from: StationId, to: StationId) -> Option<Line> {
        self.lines.get(&from).and_then(|labels| labels.get(&to)).copied()
    }

    /// Whether two stations are adjacent.
    pub fn is_linked(&self, a: StationId, b: StationId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbours| neighbours.contains(&b))
    }

    /// Ids of all stations in the graph, ascending.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency.keys().copied()
    }

    /// All links, each reported once with the lower id first.
    pub fn links(&self) -> impl Iterator<Item = (StationId, StationId, Line)> + '_ {
        self.lines.iter().flat_map(|(&from, labels)| {
            labels
                .iter()
                .filter(move |&(&to, _)| from < to)
                .map(move |(&to, &line)| (from, to, line))
        })
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Checks that adjacency is symmetric and agrees with the line labels.
    pub fn is_consistent(&self) -> bool {
        if !self.adjacency.keys().eq(self.lines.keys()) {
            return false;
        }

        self.adjacency.iter().all(|(from, neighbours)| {
            let Some(labels) = self.lines.get(from) else {
                return false;
            };
            neighbours.iter().eq(labels.keys())
                && neighbours.iter().all(|to| {
                    self.is_linked(*to, *from)
                        && self.line_between(*to, *from) == labels.get(to).copied()
                })
        })
    }
}
