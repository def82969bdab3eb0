//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::network::StationId;
use crate::planner::RouteError;
use crate::selection::{Selection, SelectionEvent};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/route", get(find_route))
        .route("/api/selection", get(get_selection).post(post_selection))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Map page.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let selection = state.selection.read().await.clone();
    let route = selected_route(&state, &selection).await?;

    let template = IndexTemplate {
        map: MapView::from_network(&state.network, &selection),
        route,
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// List all stations.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let stations = state
        .network
        .stations
        .iter()
        .map(|s| StationResult::from_station(s, &state.network))
        .collect();

    Json(StationListResponse { stations })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Find the route between two named stations.
async fn find_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteRequest>,
) -> Result<Response, AppError> {
    let from = resolve(&state, &req.from)?;
    let to = resolve(&state, &req.to)?;

    let route = state.routes.route(&state.network, from, to).await?;
    let response = RouteResponse::from_outcome(&state.network, from, to, route.as_deref());

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = RouteResultTemplate { route: response };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(response).into_response())
    }
}

/// Current selection.
async fn get_selection(State(state): State<AppState>) -> Result<Json<SelectionResponse>, AppError> {
    let selection = state.selection.read().await.clone();
    let route = selected_route(&state, &selection).await?;

    Ok(Json(SelectionResponse::from_selection(
        &selection,
        &state.network,
        route,
    )))
}

/// Apply a pointer event to the selection.
async fn post_selection(
    State(state): State<AppState>,
    Json(req): Json<SelectionEventRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let event = match req {
        SelectionEventRequest::Enter { station } => {
            SelectionEvent::PointerEnter(resolve(&state, &station)?)
        }
        SelectionEventRequest::Exit { station } => {
            SelectionEvent::PointerExit(resolve(&state, &station)?)
        }
        SelectionEventRequest::Release { button } => SelectionEvent::Release(button),
    };

    let selection = {
        let mut guard = state.selection.write().await;
        if let Some(effect) = guard.apply(event) {
            debug!(?effect, "Selection changed");
        }
        guard.clone()
    };

    let route = selected_route(&state, &selection).await?;

    Ok(Json(SelectionResponse::from_selection(
        &selection,
        &state.network,
        route,
    )))
}

/// Route between the chosen stations, once both are chosen.
async fn selected_route(
    state: &AppState,
    selection: &Selection,
) -> Result<Option<RouteResponse>, AppError> {
    let (Some(from), Some(to)) = (selection.state().from(), selection.state().to()) else {
        return Ok(None);
    };

    let route = state.routes.route(&state.network, from, to).await?;
    Ok(Some(RouteResponse::from_outcome(
        &state.network,
        from,
        to,
        route.as_deref(),
    )))
}

/// Resolve a station name to its id.
fn resolve(state: &AppState, name: &str) -> Result<StationId, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Station name is required".to_string(),
        });
    }

    state
        .network
        .station(name)
        .map(|station| station.id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown station: {}", name),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            RouteError::NotAdjacent(..) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
