//! Grid to screen mapping.

use serde::Serialize;
use trail_path::Coordinate;

/// A normalized position. Grid cells fall in `[0, 1]` on both axes; points
/// placed off the grid, such as a start with a negative column, fall outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    /// Horizontal, from the column.
    pub x: f64,
    /// Vertical, from the row.
    pub y: f64,
}

impl Position {
    /// The same position in `0..100` units.
    #[must_use]
    pub fn percent(self) -> Self {
        Self {
            x: self.x * 100.0,
            y: self.y * 100.0,
        }
    }
}

/// Maps grid coordinates onto a fixed square grid of `size` rows and columns.
/// Row and column `0` sit at `0.0`, row and column `size - 1` at `1.0`.
///
/// The mapping does not depend on which checkpoints a path holds, so a
/// checkpoint stays put when a cutoff drops others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    size: u32,
}

impl GridLayout {
    /// Grid size used when a document does not set one.
    pub const DEFAULT_SIZE: u32 = 3;

    /// A layout over a `size` by `size` grid.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Rows and columns in the grid.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Position of `coordinate`. A grid with a single line maps to its centre.
    #[must_use]
    pub fn position(&self, coordinate: Coordinate) -> Position {
        let span = f64::from(self.size.saturating_sub(1));
        let axis = |value: f64| if span > 0.0 { value / span } else { 0.5 };

        Position {
            x: axis(coordinate.col),
            y: axis(coordinate.row),
        }
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
