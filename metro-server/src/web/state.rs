//! Application state for the web layer.
//!
//! There is one selection per server process, not per client: every browser
//! viewing the map drives and sees the same origin and destination.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{RouteCache, RouteCacheConfig};
use crate::network::Network;
use crate::selection::Selection;

/// Shared application state.
///
/// The network is immutable once built; only the selection changes.
#[derive(Clone)]
pub struct AppState {
    /// The metro network
    pub network: Arc<Network>,

    /// Route planner with result cache
    pub routes: Arc<RouteCache>,

    /// Stations chosen on the map view
    pub selection: Arc<RwLock<Selection>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, cache_config: &RouteCacheConfig) -> Self {
        Self {
            network: Arc::new(network),
            routes: Arc::new(RouteCache::new(cache_config)),
            selection: Arc::new(RwLock::new(Selection::new())),
        }
    }
}
