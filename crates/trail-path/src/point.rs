//! Typed path points.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Stable identity of an interpolated dot.
///
/// Derived from the segment and step that produced the dot rather than its
/// position in the path, so identities survive path reconstruction. Segment 0
/// runs from the start to checkpoint 0; segment `i` runs from checkpoint
/// `i - 1` to checkpoint `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DotId {
    /// Segment the dot belongs to.
    pub segment: usize,
    /// Step within the segment, starting at 1.
    pub step: u32,
}

impl DotId {
    /// Creates a dot identifier.
    #[must_use]
    pub const fn new(segment: usize, step: u32) -> Self {
        Self { segment, step }
    }
}

impl fmt::Display for DotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.segment, self.step)
    }
}

/// A single point on the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathPoint {
    /// Where the token enters the timeline.
    Start {
        /// Grid row.
        row: f64,
        /// Grid column.
        col: f64,
    },
    /// An interpolated marker between two stops.
    Dot {
        /// Grid row.
        row: f64,
        /// Grid column.
        col: f64,
        /// Stable marker identity.
        id: DotId,
    },
    /// A timeline milestone.
    Checkpoint {
        /// Grid row.
        row: f64,
        /// Grid column.
        col: f64,
        /// Ordinal of the checkpoint.
        checkpoint_index: usize,
    },
}

impl PathPoint {
    /// Returns the grid coordinate of this point.
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        match *self {
            Self::Start { row, col }
            | Self::Dot { row, col, .. }
            | Self::Checkpoint { row, col, .. } => Coordinate::new(row, col),
        }
    }

    /// Returns the dot identity if this point is a dot.
    #[must_use]
    pub fn dot_id(&self) -> Option<DotId> {
        match *self {
            Self::Dot { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Returns the checkpoint ordinal if this point is a checkpoint.
    #[must_use]
    pub fn checkpoint_index(&self) -> Option<usize> {
        match *self {
            Self::Checkpoint { checkpoint_index, .. } => Some(checkpoint_index),
            _ => None,
        }
    }

    /// Returns `true` if this point is a dot.
    #[must_use]
    pub fn is_dot(&self) -> bool {
        matches!(self, Self::Dot { .. })
    }
}
