//! Core domain types for Braille exploration.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod dots;
mod events;
mod geometry;
pub mod ui;

pub use dots::{Dot, DotPattern, InvalidDot, InvalidPattern};
pub use events::EngineEvent;
pub use geometry::{CELL_COLS, CELL_ROWS, CellGeometry, DotAddress, Point};
