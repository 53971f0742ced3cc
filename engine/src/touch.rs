//! Translation from terminal cells to cell coordinates.

use braille_types::{CellGeometry, Point};

/// Terminal rectangle the touch grid was last drawn into.
///
/// The rectangle spans the whole grid including the trailing gap after the
/// last column and row, so terminal cells scale linearly onto
/// [`CellGeometry::extent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchSurface {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TouchSurface {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of terminal cell (`column`, `row`) in cell coordinates.
    ///
    /// Positions outside the surface map outside the grid, which the engine
    /// treats as "no dot".
    #[must_use]
    pub fn to_cell_point(&self, column: u16, row: u16) -> Point {
        let (extent_w, extent_h) = CellGeometry::STANDARD.extent();
        let rel_x = f64::from(column) - f64::from(self.x) + 0.5;
        let rel_y = f64::from(row) - f64::from(self.y) + 0.5;
        Point::new(
            rel_x * extent_w / f64::from(self.width.max(1)),
            rel_y * extent_h / f64::from(self.height.max(1)),
        )
    }
}
