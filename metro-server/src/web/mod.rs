//! Web layer for the metro map.
//!
//! Serves the map page and HTTP endpoints for route queries and
//! pointer-driven station selection.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
