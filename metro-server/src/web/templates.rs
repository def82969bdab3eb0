//! Askama templates for the web frontend.

use askama::Template;

use crate::network::{Network, Position};
use crate::selection::Selection;

use super::dto::RouteResponse;

/// Size of the drawn map in SVG units.
const MAP_WIDTH: f32 = 800.0;
const MAP_HEIGHT: f32 = 600.0;
const MAP_MARGIN: f32 = 48.0;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Map page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub map: MapView,
    pub route: Option<RouteResponse>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route result fragment.
#[derive(Template)]
#[template(path = "route_result.html")]
pub struct RouteResultTemplate {
    pub route: RouteResponse,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// The network laid out for drawing.
#[derive(Debug, Clone)]
pub struct MapView {
    pub width: f32,
    pub height: f32,
    pub links: Vec<LinkView>,
    pub stations: Vec<StationView>,
}

impl MapView {
    /// Lay out a network, marking the stations chosen in `selection`.
    pub fn from_network(network: &Network, selection: &Selection) -> Self {
        let projection = Projection::fit(network.stations.iter().map(|s| s.position));
        let chosen = selection.highlighted();

        let stations = network
            .stations
            .iter()
            .map(|s| {
                let (x, y) = projection.apply(s.position);
                StationView {
                    name: s.name.clone(),
                    x,
                    y,
                    is_chosen: chosen.contains(&s.id),
                }
            })
            .collect();

        let links = network
            .graph
            .links()
            .filter_map(|(a, b, line)| {
                let a = network.stations.get(a)?;
                let b = network.stations.get(b)?;
                let (x1, y1) = projection.apply(a.position);
                let (x2, y2) = projection.apply(b.position);
                Some(LinkView {
                    x1,
                    y1,
                    x2,
                    y2,
                    line: line.as_str(),
                    colour: line.colour(),
                })
            })
            .collect();

        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            links,
            stations,
        }
    }
}

/// A link drawn as a line segment.
#[derive(Debug, Clone)]
pub struct LinkView {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub line: &'static str,
    pub colour: &'static str,
}

/// A station marker.
#[derive(Debug, Clone)]
pub struct StationView {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub is_chosen: bool,
}

impl StationView {
    /// CSS class for the marker.
    pub fn class(&self) -> &'static str {
        if self.is_chosen {
            "station chosen"
        } else {
            "station"
        }
    }
}

/// Maps map coordinates onto the SVG canvas, keeping the aspect ratio.
///
/// Map `y` grows upwards, SVG `y` grows downwards.
#[derive(Debug, Clone, Copy)]
struct Projection {
    min_x: f32,
    max_y: f32,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Projection {
    fn fit(positions: impl Iterator<Item = Position>) -> Self {
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        for p in positions {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        if !min_x.is_finite() {
            // No stations
            (min_x, max_x, min_y, max_y) = (0.0, 0.0, 0.0, 0.0);
        }

        let span_x = max_x - min_x;
        let span_y = max_y - min_y;
        let usable_w = MAP_WIDTH - 2.0 * MAP_MARGIN;
        let usable_h = MAP_HEIGHT - 2.0 * MAP_MARGIN;

        let scale = match (span_x > 0.0, span_y > 0.0) {
            (true, true) => (usable_w / span_x).min(usable_h / span_y),
            (true, false) => usable_w / span_x,
            (false, true) => usable_h / span_y,
            (false, false) => 1.0,
        };

        // Centre the drawing on the canvas
        let offset_x = (MAP_WIDTH - span_x * scale) / 2.0;
        let offset_y = (MAP_HEIGHT - span_y * scale) / 2.0;

        Self {
            min_x,
            max_y,
            scale,
            offset_x,
            offset_y,
        }
    }

    fn apply(&self, p: Position) -> (f32, f32) {
        (
            self.offset_x + (p.x - self.min_x) * self.scale,
            self.offset_y + (self.max_y - p.y) * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Line, LinkRecord, StationId, StationRecord, build_network};
    use crate::selection::{Button, SelectionEvent};

    fn network() -> Network {
        let stations = vec![
            StationRecord::new("West", -10.0, 0.0),
            StationRecord::new("East", 10.0, 0.0),
            StationRecord::new("North", 0.0, 5.0),
        ];
        let links = vec![
            LinkRecord::new("West", "East", Line::Blue),
            LinkRecord::new("East", "North", Line::Black),
        ];
        build_network(&stations, &links).network
    }

    #[test]
    fn layout_fits_canvas() {
        let view = MapView::from_network(&network(), &Selection::new());

        for s in &view.stations {
            assert!(s.x >= MAP_MARGIN - 0.01 && s.x <= MAP_WIDTH - MAP_MARGIN + 0.01);
            assert!(s.y >= 0.0 && s.y <= MAP_HEIGHT);
        }

        let west = &view.stations[0];
        let east = &view.stations[1];
        let north = &view.stations[2];
        assert!(west.x < north.x && north.x < east.x);
        // North is drawn above the others
        assert!(north.y < west.y);
        assert_eq!(west.y, east.y);
    }

    #[test]
    fn links_carry_line_colour() {
        let view = MapView::from_network(&network(), &Selection::new());

        assert_eq!(view.links.len(), 2);
        assert_eq!(view.links[0].colour, Line::Blue.colour());
        assert_eq!(view.links[1].line, "Black");
    }

    #[test]
    fn chosen_stations_are_marked() {
        let mut selection = Selection::new();
        selection.apply(SelectionEvent::PointerEnter(StationId(1)));
        selection.apply(SelectionEvent::Release(Button::Primary));

        let view = MapView::from_network(&network(), &selection);

        assert_eq!(view.stations[1].class(), "station chosen");
        assert_eq!(view.stations[0].class(), "station");
    }

    #[test]
    fn single_station_is_centred() {
        let net = build_network(&[StationRecord::new("Only", 3.0, 3.0)], &[]).network;
        let view = MapView::from_network(&net, &Selection::new());

        assert_eq!(view.stations[0].x, MAP_WIDTH / 2.0);
        assert_eq!(view.stations[0].y, MAP_HEIGHT / 2.0);
    }

    #[test]
    fn empty_network_renders() {
        let view = MapView::from_network(&Network::default(), &Selection::new());
        let html = IndexTemplate { map: view, route: None }.render().unwrap();
        assert!(html.contains("<svg"));
    }
}
