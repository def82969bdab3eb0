use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::config::ServerConfig;
use metro_server::map::{MapConfig, demo_map};
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("metro_server=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load the map (fail fast if a configured map is unreadable)
    let map = match &config.map_path {
        Some(path) => match MapConfig::load(path) {
            Ok(map) => {
                info!(path = %path.display(), "Loaded map");
                map
            }
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            info!("METRO_MAP not set, using the built-in demo map");
            demo_map()
        }
    };

    let report = map.build();
    info!(
        stations = report.network.stations.len(),
        links = report.network.graph.link_count(),
        skipped = report.diagnostics.len(),
        "Built metro network"
    );

    // Build app state
    let state = AppState::new(report.network, &config.route_cache);

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "Failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Metro map listening on http://{}", config.addr);
    info!("API Endpoints:");
    info!("  GET  /health         - Health check");
    info!("  GET  /api/stations   - List stations");
    info!("  GET  /api/route      - Route between two stations (?from=&to=)");
    info!("  GET  /api/selection  - Current selection");
    info!("  POST /api/selection  - Send a pointer event");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
