//! Metro map route server.
//!
//! Draws a metro network, lets the rider pick two stations, and shows the
//! route with the fewest stops between them along with how many times the
//! rider has to change line.

pub mod cache;
pub mod config;
pub mod map;
pub mod network;
pub mod planner;
pub mod selection;
pub mod web;
