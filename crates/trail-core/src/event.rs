//! Domain events and their metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;

/// Metadata attached to every recorded event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique, time-ordered event identifier.
    pub event_id: Uuid,
    /// Dotted type name, `<context>.<fact>`.
    pub event_type: String,
    /// The aggregate that recorded the event.
    pub aggregate_id: Uuid,
    /// Position in the aggregate's history, starting at 1.
    pub sequence_number: i64,
    /// Correlation ID of the command behind the event.
    pub correlation_id: Uuid,
    /// The command (for the first event of a command) or event that caused it.
    pub causation_id: Uuid,
    /// When the event was recorded.
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    /// Metadata for the event that follows `version` in `aggregate_id`'s
    /// history.
    #[must_use]
    pub fn next(
        event_type: &str,
        aggregate_id: Uuid,
        version: i64,
        correlation_id: Uuid,
        causation_id: Uuid,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            event_type: event_type.to_owned(),
            aggregate_id,
            sequence_number: version + 1,
            correlation_id,
            causation_id,
            occurred_at: clock.now(),
        }
    }

    /// Whether the event was caused directly by its command rather than by
    /// another event.
    #[must_use]
    pub fn is_command_root(&self) -> bool {
        self.causation_id == self.correlation_id
    }
}

/// Trait that all domain events implement.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;

    /// Serializes the event payload to JSON.
    fn to_payload(&self) -> serde_json::Value;

    /// Returns the metadata for this event.
    fn metadata(&self) -> &EventMetadata;
}
