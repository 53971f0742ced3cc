//! Cell layout and coordinate-to-dot mapping.
//!
//! A cell is a grid of [`CELL_ROWS`] x [`CELL_COLS`] square targets separated by a
//! fixed gap. Dots are numbered row by row: `dot = row * CELL_COLS + col + 1`.

use serde::{Deserialize, Serialize};

use crate::Dot;

pub const CELL_ROWS: u8 = 3;
pub const CELL_COLS: u8 = 2;

/// A discrete grid position inside a cell. Always in range once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DotAddress {
    row: u8,
    col: u8,
}

impl DotAddress {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < CELL_ROWS && col < CELL_COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Address of a dot number.
    #[must_use]
    pub const fn of(dot: Dot) -> Self {
        let index = dot.get() - 1;
        Self {
            row: index / CELL_COLS,
            col: index % CELL_COLS,
        }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[must_use]
    pub fn dot(self) -> Dot {
        let number = self.row * CELL_COLS + self.col + 1;
        // row < 3 and col < 2 keep the number inside 1..=6
        Dot::ALL[usize::from(number - 1)]
    }
}

/// A pointer sample in cell coordinates (origin at the top-left of dot 1).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Square target size and spacing of the touch grid.
///
/// Only [`CellGeometry::STANDARD`] exists; front ends scale their own
/// coordinates into this space instead of reconfiguring it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    cell_size: f64,
    gap: f64,
}

impl CellGeometry {
    pub const STANDARD: Self = Self {
        cell_size: 100.0,
        gap: 20.0,
    };

    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    /// Distance from one target's origin to the next.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.cell_size + self.gap
    }

    /// Width and height of the whole grid, trailing gaps included.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        let pitch = self.pitch();
        (f64::from(CELL_COLS) * pitch, f64::from(CELL_ROWS) * pitch)
    }

    /// Map a coordinate to its grid address.
    ///
    /// Each target owns the gap that follows it. Coordinates left of or above
    /// the grid, past its last row/column, or non-finite map to `None`.
    #[must_use]
    pub fn address_at(&self, point: Point) -> Option<DotAddress> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        let pitch = self.pitch();
        let row = (point.y / pitch).floor();
        let col = (point.x / pitch).floor();
        if row < 0.0 || col < 0.0 || row >= f64::from(CELL_ROWS) || col >= f64::from(CELL_COLS) {
            return None;
        }
        DotAddress::new(row as u8, col as u8)
    }

    #[must_use]
    pub fn dot_at(&self, point: Point) -> Option<Dot> {
        self.address_at(point).map(DotAddress::dot)
    }

    /// Dot whose square target (gap excluded) contains `point`.
    ///
    /// Used for drawing; touch validation goes through [`Self::dot_at`].
    #[must_use]
    pub fn target_at(&self, point: Point) -> Option<Dot> {
        let dot = self.dot_at(point)?;
        let pitch = self.pitch();
        let inside = point.x.rem_euclid(pitch) < self.cell_size
            && point.y.rem_euclid(pitch) < self.cell_size;
        inside.then_some(dot)
    }

    /// Center of a dot's square target.
    #[must_use]
    pub fn center_of(&self, dot: Dot) -> Point {
        let address = DotAddress::of(dot);
        let pitch = self.pitch();
        let half = self.cell_size / 2.0;
        Point {
            x: f64::from(address.col()) * pitch + half,
            y: f64::from(address.row()) * pitch + half,
        }
    }
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self::STANDARD
    }
}
