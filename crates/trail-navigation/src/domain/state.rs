//! Navigation state value types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use trail_path::DotId;
use uuid::Uuid;

/// Observable navigation state.
///
/// At rest, every dot before `current_path_index` is in `eaten_markers` and
/// no dot after it is. When set, `target_checkpoint` names the checkpoint at
/// `current_path_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Index into the path where the token currently is.
    pub current_path_index: usize,
    /// `true` while a move is in flight.
    pub animating: bool,
    /// Checkpoint whose detail overlay is open.
    pub target_checkpoint: Option<usize>,
    /// Dots the token has passed.
    pub eaten_markers: BTreeSet<DotId>,
}

impl NavigationState {
    /// Idle state with the token at `path_index` and nothing eaten.
    #[must_use]
    pub fn resting_at(path_index: usize) -> Self {
        Self {
            current_path_index: path_index,
            animating: false,
            target_checkpoint: None,
            eaten_markers: BTreeSet::new(),
        }
    }
}

/// Direction of travel along the path, fixed for the whole move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Towards higher path indices.
    Forward,
    /// Towards lower path indices.
    Backward,
}

impl MoveDirection {
    /// Forward when `destination` lies after `from`, backward otherwise.
    #[must_use]
    pub fn between(from: usize, destination: usize) -> Self {
        if destination > from {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// The neighbouring index in this direction, if it exists.
    #[must_use]
    pub fn neighbour(self, path_index: usize) -> Option<usize> {
        match self {
            Self::Forward => path_index.checked_add(1),
            Self::Backward => path_index.checked_sub(1),
        }
    }
}

/// The move currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveMove {
    /// Destination checkpoint ordinal.
    pub checkpoint: usize,
    /// Path index of the destination checkpoint.
    pub destination: usize,
    /// Direction of travel.
    pub direction: MoveDirection,
    /// Correlation ID of the request that started the move.
    pub correlation_id: Uuid,
    /// Event that started the move; ticks are caused by it.
    pub started_by: Uuid,
}

/// Result of advancing the engine by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No move in flight; nothing happened.
    Idle,
    /// The token advanced to `path_index` and is still moving.
    Stepped {
        /// Newly entered path index.
        path_index: usize,
    },
    /// The token reached its destination and the overlay opened.
    Arrived {
        /// Checkpoint the token now rests on.
        checkpoint: usize,
    },
}
