//! A planned route: the shortest path plus the statistics shown to riders.

use tracing::debug;

use crate::network::{Line, Network, StationId, StationIndex};

use super::bfs::{Path, find_path};
use super::transfers::{changes, edge_lines};
use super::RouteError;

/// Separator between station names when a route is written out.
pub const PATH_SEPARATOR: &str = "->";

/// A route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: Path,
    lines: Vec<Line>,
    transfers: usize,
}

impl Route {
    /// Annotate a path with the lines it travels on.
    pub fn new(network: &Network, path: Path) -> Result<Self, RouteError> {
        let lines = edge_lines(&network.graph, path.stations())?;
        let transfers = changes(&lines);
        Ok(Self {
            path,
            lines,
            transfers,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Line of each link travelled, in order. One shorter than the path.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of line changes.
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    pub fn hops(&self) -> usize {
        self.path.hops()
    }

    /// Station names in travel order.
    ///
    /// Stations missing from `stations` are written as their id.
    pub fn names(&self, stations: &StationIndex) -> Vec<String> {
        self.path
            .stations()
            .iter()
            .map(|&id| {
                stations
                    .name_of(id)
                    .map(str::to_string)
                    .unwrap_or_else(|| id.to_string())
            })
            .collect()
    }

    /// The route written as `A->B->C`.
    pub fn describe(&self, stations: &StationIndex) -> String {
        self.names(stations).join(PATH_SEPARATOR)
    }
}

/// Plan the route with the fewest hops between two stations.
///
/// `Ok(None)` means both stations exist but are not connected.
pub fn plan_route(
    network: &Network,
    from: StationId,
    to: StationId,
) -> Result<Option<Route>, RouteError> {
    let Some(path) = find_path(&network.graph, from, to)? else {
        debug!(%from, %to, "No route");
        return Ok(None);
    };

    let route = Route::new(network, path)?;
    debug!(
        %from,
        %to,
        hops = route.hops(),
        transfers = route.transfers(),
        "Route planned"
    );
    Ok(Some(route))
}
