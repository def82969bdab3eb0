//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::{Line, Network, Station, StationId};
use crate::planner::Route;
use crate::selection::{Button, Selection};

/// A station in the station list.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station id
    pub id: usize,

    /// Display name
    pub name: String,

    /// Map coordinates
    pub x: f32,
    pub y: f32,
    pub z: f32,

    /// Number of stations linked to this one
    pub links: usize,
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station, network: &Network) -> Self {
        let links = network
            .graph
            .neighbours(station.id)
            .map(Iterator::count)
            .unwrap_or(0);

        Self {
            id: station.id.0,
            name: station.name.clone(),
            x: station.position.x,
            y: station.position.y,
            z: station.position.z,
            links,
        }
    }
}

/// Response for the station list.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationResult>,
}

/// Request for a route between two named stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,
}

/// A planned route, or the lack of one.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Whether the stations are connected
    pub found: bool,

    /// Station names in travel order (empty when not found)
    pub path: Vec<String>,

    /// Line of each link travelled
    pub lines: Vec<Line>,

    /// The path written out, e.g. "A->B->C"
    pub display: String,

    /// Number of line changes
    pub transfers: usize,

    /// Number of links travelled
    pub hops: usize,
}

impl RouteResponse {
    /// Create from the outcome of a route query.
    pub fn from_outcome(
        network: &Network,
        from: StationId,
        to: StationId,
        route: Option<&Route>,
    ) -> Self {
        let name = |id: StationId| {
            network
                .stations
                .name_of(id)
                .map(str::to_string)
                .unwrap_or_else(|| id.to_string())
        };

        match route {
            Some(route) => Self {
                from: name(from),
                to: name(to),
                found: true,
                path: route.names(&network.stations),
                lines: route.lines().to_vec(),
                display: route.describe(&network.stations),
                transfers: route.transfers(),
                hops: route.hops(),
            },
            None => Self {
                from: name(from),
                to: name(to),
                found: false,
                path: Vec::new(),
                lines: Vec::new(),
                display: String::new(),
                transfers: 0,
                hops: 0,
            },
        }
    }
}

/// An input event from the map view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SelectionEventRequest {
    /// The pointer moved onto a station
    Enter { station: String },

    /// The pointer left a station
    Exit { station: String },

    /// A mouse button was released
    Release { button: Button },
}

/// The current selection, with the route when both ends are chosen.
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    /// State machine state: "idle", "one_selected" or "two_selected"
    pub state: &'static str,

    /// Station under the pointer
    pub hovered: Option<String>,

    /// Chosen origin
    pub from: Option<String>,

    /// Chosen destination
    pub to: Option<String>,

    /// Route between origin and destination
    pub route: Option<RouteResponse>,
}

impl SelectionResponse {
    /// Create from the selection state machine.
    pub fn from_selection(
        selection: &Selection,
        network: &Network,
        route: Option<RouteResponse>,
    ) -> Self {
        let name = |id: Option<StationId>| {
            id.and_then(|id| network.stations.name_of(id))
                .map(str::to_string)
        };
        let state = selection.state();

        Self {
            state: state.name(),
            hovered: name(selection.hovered()),
            from: name(state.from()),
            to: name(state.to()),
            route,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{LinkRecord, StationRecord, build_network};
    use crate::planner::plan_route;

    fn network() -> Network {
        let stations = vec![
            StationRecord::new("A", 0.0, 0.0),
            StationRecord::new("B", 1.0, 0.0),
            StationRecord::new("C", 2.0, 0.0),
        ];
        let links = vec![
            LinkRecord::new("A", "B", Line::Red),
            LinkRecord::new("B", "C", Line::Green),
        ];
        build_network(&stations, &links).network
    }

    #[test]
    fn route_response_found() {
        let net = network();
        let route = plan_route(&net, StationId(0), StationId(2)).unwrap();
        let response = RouteResponse::from_outcome(&net, StationId(0), StationId(2), route.as_ref());

        assert!(response.found);
        assert_eq!(response.path, vec!["A", "B", "C"]);
        assert_eq!(response.display, "A->B->C");
        assert_eq!(response.lines, vec![Line::Red, Line::Green]);
        assert_eq!(response.transfers, 1);
        assert_eq!(response.hops, 2);
    }

    #[test]
    fn route_response_not_found() {
        let net = network();
        let response = RouteResponse::from_outcome(&net, StationId(0), StationId(2), None);

        assert!(!response.found);
        assert!(response.path.is_empty());
        assert_eq!(response.from, "A");
        assert_eq!(response.to, "C");
    }

    #[test]
    fn parse_selection_events() {
        let enter: SelectionEventRequest =
            serde_json::from_str(r#"{"type": "enter", "station": "A"}"#).unwrap();
        assert_eq!(
            enter,
            SelectionEventRequest::Enter {
                station: "A".into()
            }
        );

        let release: SelectionEventRequest =
            serde_json::from_str(r#"{"type": "release", "button": "secondary"}"#).unwrap();
        assert_eq!(
            release,
            SelectionEventRequest::Release {
                button: Button::Secondary
            }
        );

        assert!(serde_json::from_str::<SelectionEventRequest>(r#"{"type": "wave"}"#).is_err());
    }

    #[test]
    fn station_result_counts_links() {
        let net = network();
        let b = net.stations.get(StationId(1)).unwrap();
        let result = StationResult::from_station(b, &net);

        assert_eq!(result.name, "B");
        assert_eq!(result.links, 2);
    }
}
