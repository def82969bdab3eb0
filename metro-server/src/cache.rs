//! In-memory cache of planned routes.
//!
//! The network never changes after startup, so a route between two stations
//! stays valid for the lifetime of the process. The cache only bounds how
//! much memory repeated queries can hold. Both outcomes are cached: a found
//! route and "no route".

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::network::{Network, StationId};
use crate::planner::{Route, RouteError, plan_route};

/// Cache key: (from, to).
type RouteKey = (StationId, StationId);

/// Cached outcome of a route query. `None` means the stations are not connected.
pub type CachedRoute = Option<Arc<Route>>;

/// Configuration for the route cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl RouteCacheConfig {
    /// Longest TTL moka accepts (1000 years).
    pub const MAX_TTL: Duration = Duration::from_secs(1000 * 365 * 24 * 60 * 60);
}

impl Default for RouteCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1024,
        }
    }
}

/// Route planner with a result cache in front of it.
pub struct RouteCache {
    routes: MokaCache<RouteKey, CachedRoute>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    ///
    /// A TTL above [`RouteCacheConfig::MAX_TTL`] is clamped to it.
    pub fn new(config: &RouteCacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl.min(RouteCacheConfig::MAX_TTL))
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Plan a route, using the cache if available.
    ///
    /// Errors are returned as-is and never cached.
    pub async fn route(
        &self,
        network: &Network,
        from: StationId,
        to: StationId,
    ) -> Result<CachedRoute, RouteError> {
        let key = (from, to);

        if let Some(cached) = self.routes.get(&key).await {
            trace!(%from, %to, "Route cache hit");
            return Ok(cached);
        }

        let route = plan_route(network, from, to)?.map(Arc::new);
        self.routes.insert(key, route.clone()).await;

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Line, LinkRecord, StationRecord, build_network};

    fn network() -> Network {
        let stations = vec![
            StationRecord::new("A", 0.0, 0.0),
            StationRecord::new("B", 1.0, 0.0),
            StationRecord::new("C", 2.0, 0.0),
            StationRecord::new("D", 5.0, 5.0),
        ];
        let links = vec![
            LinkRecord::new("A", "B", Line::Red),
            LinkRecord::new("B", "C", Line::Green),
        ];
        build_network(&stations, &links).network
    }

    #[test]
    fn default_config() {
        let config = RouteCacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 1024);
    }

    #[tokio::test]
    async fn caches_found_route() {
        let net = network();
        let cache = RouteCache::new(&RouteCacheConfig::default());

        let first = cache
            .route(&net, StationId(0), StationId(2))
            .await
            .unwrap()
            .unwrap();
        let second = cache
            .route(&net, StationId(0), StationId(2))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(first.transfers(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn caches_missing_route() {
        let net = network();
        let cache = RouteCache::new(&RouteCacheConfig::default());

        assert!(cache.route(&net, StationId(0), StationId(3)).await.unwrap().is_none());
        assert!(cache.route(&net, StationId(0), StationId(3)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn oversized_ttl_is_clamped() {
        let net = network();
        let cache = RouteCache::new(&RouteCacheConfig {
            ttl: Duration::from_secs(u64::MAX),
            max_capacity: 16,
        });

        assert!(cache.route(&net, StationId(0), StationId(1)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn errors_pass_through() {
        let net = network();
        let cache = RouteCache::new(&RouteCacheConfig::default());

        assert_eq!(
            cache.route(&net, StationId(0), StationId(42)).await,
            Err(RouteError::UnknownStation(StationId(42)))
        );
    }
}
