//! Domain events for the navigation context.

use serde::{Deserialize, Serialize};
use trail_core::event::{DomainEvent, EventMetadata};
use trail_path::DotId;
use uuid::Uuid;

use super::state::MoveDirection;

/// Emitted when an accepted request starts a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveStarted {
    /// The engine identifier.
    pub engine_id: Uuid,
    /// Destination checkpoint ordinal.
    pub checkpoint: usize,
    /// Path index the move starts from.
    pub from_path_index: usize,
    /// Path index of the destination checkpoint.
    pub destination_path_index: usize,
    /// Direction of travel.
    pub direction: MoveDirection,
}

/// Emitted when dots are marked as eaten ahead of a forward move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkersEaten {
    /// The engine identifier.
    pub engine_id: Uuid,
    /// Dots newly marked as eaten.
    pub dot_ids: Vec<DotId>,
}

/// Emitted when dots are restored ahead of a backward move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkersRestored {
    /// The engine identifier.
    pub engine_id: Uuid,
    /// Dots no longer eaten.
    pub dot_ids: Vec<DotId>,
}

/// Emitted on every tick of a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenStepped {
    /// The engine identifier.
    pub engine_id: Uuid,
    /// Newly entered path index.
    pub path_index: usize,
}

/// Emitted when a move reaches its destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointReached {
    /// The engine identifier.
    pub engine_id: Uuid,
    /// Checkpoint the token now rests on.
    pub checkpoint: usize,
    /// Path index of that checkpoint.
    pub path_index: usize,
}

/// Emitted when an open overlay is dismissed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayClosed {
    /// The engine identifier.
    pub engine_id: Uuid,
    /// Checkpoint whose overlay was closed.
    pub checkpoint: usize,
}

/// Event type identifier for [`MoveStarted`].
pub const MOVE_STARTED_EVENT_TYPE: &str = "navigation.move_started";

/// Event type identifier for [`MarkersEaten`].
pub const MARKERS_EATEN_EVENT_TYPE: &str = "navigation.markers_eaten";

/// Event type identifier for [`MarkersRestored`].
pub const MARKERS_RESTORED_EVENT_TYPE: &str = "navigation.markers_restored";

/// Event type identifier for [`TokenStepped`].
pub const TOKEN_STEPPED_EVENT_TYPE: &str = "navigation.token_stepped";

/// Event type identifier for [`CheckpointReached`].
pub const CHECKPOINT_REACHED_EVENT_TYPE: &str = "navigation.checkpoint_reached";

/// Event type identifier for [`OverlayClosed`].
pub const OVERLAY_CLOSED_EVENT_TYPE: &str = "navigation.overlay_closed";

/// Event payload variants for the navigation context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NavigationEventKind {
    /// A move has started.
    MoveStarted(MoveStarted),
    /// Dots have been eaten.
    MarkersEaten(MarkersEaten),
    /// Dots have been restored.
    MarkersRestored(MarkersRestored),
    /// The token advanced one index.
    TokenStepped(TokenStepped),
    /// The token arrived at its destination.
    CheckpointReached(CheckpointReached),
    /// The overlay was closed.
    OverlayClosed(OverlayClosed),
}

impl NavigationEventKind {
    /// Returns the event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::MoveStarted(_) => MOVE_STARTED_EVENT_TYPE,
            Self::MarkersEaten(_) => MARKERS_EATEN_EVENT_TYPE,
            Self::MarkersRestored(_) => MARKERS_RESTORED_EVENT_TYPE,
            Self::TokenStepped(_) => TOKEN_STEPPED_EVENT_TYPE,
            Self::CheckpointReached(_) => CHECKPOINT_REACHED_EVENT_TYPE,
            Self::OverlayClosed(_) => OVERLAY_CLOSED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the navigation context.
#[derive(Debug, Clone)]
pub struct NavigationEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: NavigationEventKind,
}

impl DomainEvent for NavigationEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("NavigationEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
