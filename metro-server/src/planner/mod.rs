//! Route planning over the metro graph.
//!
//! Routes minimise the number of hops using breadth-first search. Transfers
//! (changes of line) are counted on the path afterwards; the search itself
//! does not try to avoid them.

mod bfs;
mod route;
mod transfers;


pub use bfs::{Path, find_path};
pub use route::{PATH_SEPARATOR, Route, plan_route};
pub use transfers::{count_transfers, edge_lines};

use crate::network::StationId;

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The station is not part of the network
    #[error("station {0} is not in the network")]
    UnknownStation(StationId),

    /// Two consecutive stations of a path are not linked
    #[error("stations {0} and {1} are not linked")]
    NotAdjacent(StationId, StationId),
}
