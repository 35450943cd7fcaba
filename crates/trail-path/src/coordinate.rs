//! Grid coordinates and token heading.

use serde::{Deserialize, Serialize};

/// A position on the logical timeline grid. Fractional values are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Grid row (grows downwards).
    pub row: f64,
    /// Grid column (grows rightwards).
    pub col: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Linear interpolation towards `to`; row and column are independent.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            row: self.row + (to.row - self.row) * t,
            col: self.col + (to.col - self.col) * t,
        }
    }
}

/// Direction the token faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    /// Facing right (the default).
    #[default]
    Right,
    /// Facing left.
    Left,
    /// Facing up.
    Up,
    /// Facing down.
    Down,
}

impl Heading {
    /// Sprite rotation in degrees for this heading.
    #[must_use]
    pub const fn rotation_degrees(self) -> i16 {
        match self {
            Self::Right => 0,
            Self::Left => 180,
            Self::Up => -90,
            Self::Down => 90,
        }
    }
}

/// Heading when moving from `from` to `to`. Vertical movement wins over
/// horizontal; identical points face right.
#[must_use]
pub fn heading(from: Coordinate, to: Coordinate) -> Heading {
    if to.row > from.row {
        Heading::Down
    } else if to.row < from.row {
        Heading::Up
    } else if to.col > from.col {
        Heading::Right
    } else if to.col < from.col {
        Heading::Left
    } else {
        Heading::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_prefers_row_changes() {
        let from = Coordinate::new(0.0, 0.0);
        assert_eq!(heading(from, Coordinate::new(1.0, 1.0)), Heading::Down);
        assert_eq!(heading(from, Coordinate::new(-0.5, -3.0)), Heading::Up);
    }

    #[test]
    fn test_heading_falls_back_to_columns_then_right() {
        let from = Coordinate::new(2.0, 1.0);
        assert_eq!(heading(from, Coordinate::new(2.0, 1.5)), Heading::Right);
        assert_eq!(heading(from, Coordinate::new(2.0, 0.0)), Heading::Left);
        assert_eq!(heading(from, from), Heading::Right);
    }

    #[test]
    fn test_rotation_degrees() {
        assert_eq!(Heading::Right.rotation_degrees(), 0);
        assert_eq!(Heading::Left.rotation_degrees(), 180);
        assert_eq!(Heading::Up.rotation_degrees(), -90);
        assert_eq!(Heading::Down.rotation_degrees(), 90);
    }

    #[test]
    fn test_lerp_interpolates_both_axes() {
        let at = Coordinate::new(0.0, 0.0).lerp(Coordinate::new(2.0, 4.0), 0.25);
        assert_eq!(at, Coordinate::new(0.5, 1.0));
    }
}
