//! Query handlers for the navigation context.
//!
//! Read-only views over the engine for subscribers that render it.

use serde::Serialize;
use trail_core::aggregate::AggregateRoot;
use trail_path::Heading;
use uuid::Uuid;

use crate::domain::aggregates::NavigationEngine;
use crate::domain::state::NavigationState;

/// Read-only view of a navigation engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationView {
    /// The engine identifier.
    pub engine_id: Uuid,
    /// Position, animating flag, overlay target and eaten markers.
    #[serde(flatten)]
    pub state: NavigationState,
    /// Checkpoint the token rests on, if idle on one.
    pub resting_checkpoint: Option<usize>,
    /// Direction the token faces.
    pub heading: Heading,
    /// Current version (event count).
    pub version: i64,
}

/// Builds the read model for `engine`.
#[must_use]
pub fn get_navigation_view(engine: &NavigationEngine) -> NavigationView {
    NavigationView {
        engine_id: engine.aggregate_id(),
        state: engine.state().clone(),
        resting_checkpoint: engine.resting_checkpoint(),
        heading: engine.heading(),
        version: engine.version(),
    }
}
