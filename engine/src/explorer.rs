//! Touch exploration of the active cell.
//!
//! Maps pointer samples to dots and confirms each raised dot at most once per
//! gesture.

use braille_types::{CellGeometry, Dot, DotPattern, Point};

/// Dots already confirmed during the open gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplorationState {
    visited: DotPattern,
}

impl ExplorationState {
    #[must_use]
    pub fn visited(&self) -> DotPattern {
        self.visited
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn clear(&mut self) {
        self.visited.clear();
    }
}

#[derive(Debug, Clone)]
pub struct Explorer {
    geometry: CellGeometry,
    state: ExplorationState,
}

impl Explorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            geometry: CellGeometry::STANDARD,
            state: ExplorationState::default(),
        }
    }

    /// Handle one pointer sample against the active pattern.
    ///
    /// Returns the dot to confirm, or `None` when the sample is off the grid,
    /// lands on a flat position, or hits a dot already confirmed this gesture.
    pub fn on_move(&mut self, point: Point, pattern: DotPattern) -> Option<Dot> {
        let dot = self.geometry.dot_at(point)?;
        if !pattern.contains(dot) {
            return None;
        }
        self.state.visited.insert(dot).then_some(dot)
    }

    pub fn on_gesture_end(&mut self) {
        self.state.clear();
    }

    #[must_use]
    pub fn state(&self) -> &ExplorationState {
        &self.state
    }

    #[must_use]
    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}
