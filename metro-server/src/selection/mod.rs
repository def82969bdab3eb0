//! Pointer-driven station selection.
//!
//! The rider hovers stations and clicks them. The primary button picks the
//! route origin and then the destination; a third primary click starts
//! over. The secondary button deselects the hovered station. Choosing the
//! destination requests a route.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::network::StationId;

/// Mouse button released over the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Primary,
    Secondary,
}

/// Input event from the map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The pointer moved onto a station
    PointerEnter(StationId),
    /// The pointer left a station
    PointerExit(StationId),
    /// A button was released
    Release(Button),
}

/// Which stations are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    OneSelected {
        from: StationId,
    },
    TwoSelected {
        from: StationId,
        to: StationId,
    },
}

impl SelectionState {
    /// Route origin, if chosen.
    pub fn from(&self) -> Option<StationId> {
        match *self {
            SelectionState::Idle => None,
            SelectionState::OneSelected { from } | SelectionState::TwoSelected { from, .. } => {
                Some(from)
            }
        }
    }

    /// Route destination, if chosen.
    pub fn to(&self) -> Option<StationId> {
        match *self {
            SelectionState::TwoSelected { to, .. } => Some(to),
            _ => None,
        }
    }

    /// Short name for the state, as reported to the view.
    pub fn name(&self) -> &'static str {
        match self {
            SelectionState::Idle => "idle",
            SelectionState::OneSelected { .. } => "one_selected",
            SelectionState::TwoSelected { .. } => "two_selected",
        }
    }
}

/// What the view should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Both ends are chosen: show the route between them
    RouteRequested { from: StationId, to: StationId },
    /// A chosen station was dropped: clear any displayed route
    RouteCleared,
}

/// Selection state machine plus the station under the pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    state: SelectionState,
    hovered: Option<StationId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Station currently under the pointer.
    pub fn hovered(&self) -> Option<StationId> {
        self.hovered
    }

    /// Stations to draw as chosen.
    pub fn highlighted(&self) -> Vec<StationId> {
        self.state.from().into_iter().chain(self.state.to()).collect()
    }

    /// Apply an input event, returning the effect for the view if any.
    pub fn apply(&mut self, event: SelectionEvent) -> Option<Effect> {
        let effect = match event {
            SelectionEvent::PointerEnter(id) => {
                self.hovered = Some(id);
                None
            }
            SelectionEvent::PointerExit(id) => {
                if self.hovered == Some(id) {
                    self.hovered = None;
                }
                None
            }
            SelectionEvent::Release(button) => {
                let Some(hovered) = self.hovered else {
                    return None;
                };
                match button {
                    Button::Primary => self.choose(hovered),
                    Button::Secondary => self.deselect(hovered),
                }
            }
        };

        trace!(?event, state = self.state.name(), ?effect, "Selection event");
        effect
    }

    fn choose(&mut self, station: StationId) -> Option<Effect> {
        match self.state {
            SelectionState::Idle | SelectionState::TwoSelected { .. } => {
                self.state = SelectionState::OneSelected { from: station };
                None
            }
            SelectionState::OneSelected { from } => {
                self.state = SelectionState::TwoSelected { from, to: station };
                Some(Effect::RouteRequested { from, to: station })
            }
        }
    }

    fn deselect(&mut self, station: StationId) -> Option<Effect> {
        let next = match self.state {
            SelectionState::TwoSelected { from, to } if to == station => {
                SelectionState::OneSelected { from }
            }
            SelectionState::TwoSelected { from, to } if from == station => {
                SelectionState::OneSelected { from: to }
            }
            SelectionState::OneSelected { from } if from == station => SelectionState::Idle,
            _ => return None,
        };

        self.state = next;
        Some(Effect::RouteCleared)
    }
}
