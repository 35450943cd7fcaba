//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// An aggregate whose state is the fold of the events it records.
///
/// Mutators record events; [`apply`](Self::apply) is the only place state
/// changes, so replaying an aggregate's history rebuilds the same state.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate records and applies.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the number of events applied so far.
    fn version(&self) -> i64;

    /// Applies one event to the state.
    fn apply(&mut self, event: &Self::Event);

    /// Returns events recorded since the last drain.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Forgets the recorded events.
    fn clear_uncommitted_events(&mut self);

    /// Takes the recorded events, leaving none behind.
    fn drain_uncommitted_events(&mut self) -> Vec<Self::Event>
    where
        Self::Event: Clone,
    {
        let events = self.uncommitted_events().to_vec();
        self.clear_uncommitted_events();
        events
    }

    /// Applies `history` in order.
    fn replay<'a>(&mut self, history: impl IntoIterator<Item = &'a Self::Event>)
    where
        Self: Sized,
        Self::Event: 'a,
    {
        for event in history {
            self.apply(event);
        }
    }
}
