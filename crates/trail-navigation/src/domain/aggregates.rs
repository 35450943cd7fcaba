//! Aggregate root for the navigation context.

use std::sync::Arc;

use trail_core::aggregate::AggregateRoot;
use trail_core::clock::Clock;
use trail_core::error::DomainError;
use trail_core::event::EventMetadata;
use trail_path::{DotId, Heading, Path, heading};
use uuid::Uuid;

use super::events::{
    CheckpointReached, MarkersEaten, MarkersRestored, MoveStarted, NavigationEvent,
    NavigationEventKind, OverlayClosed, TokenStepped,
};
use super::state::{ActiveMove, MoveDirection, NavigationState, TickOutcome};

/// The navigation engine: a state machine over one immutable path.
///
/// Idle until a request is accepted, then Animating until the token has
/// stepped, one index per tick, onto the destination checkpoint.
#[derive(Debug)]
pub struct NavigationEngine {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    path: Arc<Path>,
    state: NavigationState,
    active_move: Option<ActiveMove>,
    /// Events recorded since the last drain.
    uncommitted_events: Vec<NavigationEvent>,
}

impl NavigationEngine {
    /// Creates an idle engine with the token on the path's first dot, or on
    /// the start point when the path has no dots.
    #[must_use]
    pub fn new(id: Uuid, path: Arc<Path>) -> Self {
        let state = NavigationState::resting_at(path.initial_index());
        Self {
            id,
            version: 0,
            path,
            state,
            active_move: None,
            uncommitted_events: Vec::new(),
        }
    }

    /// The path this engine navigates.
    #[must_use]
    pub fn path(&self) -> &Arc<Path> {
        &self.path
    }

    /// Current navigation state.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The move in flight, if any.
    #[must_use]
    pub fn active_move(&self) -> Option<&ActiveMove> {
        self.active_move.as_ref()
    }

    /// `true` while a move is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.animating
    }

    /// Checkpoint the token rests on, if idle on a checkpoint.
    #[must_use]
    pub fn resting_checkpoint(&self) -> Option<usize> {
        if self.state.animating {
            return None;
        }
        self.path.checkpoint_at(self.state.current_path_index)
    }

    /// Direction the token faces: towards the next point in the direction of
    /// travel, or forward at rest. Defaults to right at the ends of the path.
    #[must_use]
    pub fn heading(&self) -> Heading {
        let current = self.state.current_path_index;
        let direction = self
            .active_move
            .map_or(MoveDirection::Forward, |active| active.direction);
        let here = self.path.point(current);
        let next = direction
            .neighbour(current)
            .and_then(|index| self.path.point(index));
        match (here, next) {
            (Some(here), Some(next)) => heading(here.coordinate(), next.coordinate()),
            _ => Heading::Right,
        }
    }

    /// Requests a move to `checkpoint`.
    ///
    /// Accepted requests immediately reconcile the eaten markers for the whole
    /// move: going forward eats every dot from the current index up to the
    /// destination, going backward restores every dot after the destination.
    /// The token itself moves only on [`tick`](Self::tick). An open overlay
    /// closes as the token leaves its checkpoint.
    ///
    /// # Errors
    ///
    /// Rejects the request without any state change with
    /// `DomainError::MoveInFlight` while animating,
    /// `DomainError::CheckpointOutOfRange` for an unknown checkpoint, and
    /// `DomainError::AlreadyAtCheckpoint` when the token already rests there.
    pub fn request_navigation(
        &mut self,
        checkpoint: usize,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        if self.state.animating {
            return Err(DomainError::MoveInFlight);
        }
        let Some(destination) = self.path.path_index_of(checkpoint) else {
            return Err(DomainError::CheckpointOutOfRange {
                index: checkpoint,
                count: self.path.checkpoint_count(),
            });
        };
        if self.resting_checkpoint() == Some(checkpoint) {
            return Err(DomainError::AlreadyAtCheckpoint(checkpoint));
        }

        let from = self.state.current_path_index;
        let direction = MoveDirection::between(from, destination);
        let started_by = self.record(
            NavigationEventKind::MoveStarted(MoveStarted {
                engine_id: self.id,
                checkpoint,
                from_path_index: from,
                destination_path_index: destination,
                direction,
            }),
            correlation_id,
            correlation_id,
            clock,
        );

        match direction {
            MoveDirection::Forward => {
                let dot_ids: Vec<DotId> = self
                    .path
                    .dots_in(from..=destination)
                    .filter(|id| !self.state.eaten_markers.contains(id))
                    .collect();
                if !dot_ids.is_empty() {
                    self.record(
                        NavigationEventKind::MarkersEaten(MarkersEaten {
                            engine_id: self.id,
                            dot_ids,
                        }),
                        correlation_id,
                        started_by,
                        clock,
                    );
                }
            }
            MoveDirection::Backward => {
                let dot_ids: Vec<DotId> = self
                    .path
                    .dots_in(destination + 1..)
                    .filter(|id| self.state.eaten_markers.contains(id))
                    .collect();
                if !dot_ids.is_empty() {
                    self.record(
                        NavigationEventKind::MarkersRestored(MarkersRestored {
                            engine_id: self.id,
                            dot_ids,
                        }),
                        correlation_id,
                        started_by,
                        clock,
                    );
                }
            }
        }

        Ok(())
    }

    /// Advances an in-flight move by exactly one path index. Arriving on the
    /// destination ends the move and opens that checkpoint's overlay.
    pub fn tick(&mut self, clock: &dyn Clock) -> TickOutcome {
        let Some(active) = self.active_move else {
            return TickOutcome::Idle;
        };
        let Some(path_index) = active.direction.neighbour(self.state.current_path_index) else {
            return TickOutcome::Idle;
        };

        self.record(
            NavigationEventKind::TokenStepped(TokenStepped {
                engine_id: self.id,
                path_index,
            }),
            active.correlation_id,
            active.started_by,
            clock,
        );

        if path_index != active.destination {
            return TickOutcome::Stepped { path_index };
        }

        self.record(
            NavigationEventKind::CheckpointReached(CheckpointReached {
                engine_id: self.id,
                checkpoint: active.checkpoint,
                path_index,
            }),
            active.correlation_id,
            active.started_by,
            clock,
        );
        TickOutcome::Arrived {
            checkpoint: active.checkpoint,
        }
    }

    /// Closes the detail overlay. Position and markers are untouched; nothing
    /// is recorded when no overlay is open.
    pub fn close_overlay(&mut self, correlation_id: Uuid, clock: &dyn Clock) {
        let Some(checkpoint) = self.state.target_checkpoint else {
            return;
        };
        self.record(
            NavigationEventKind::OverlayClosed(OverlayClosed {
                engine_id: self.id,
                checkpoint,
            }),
            correlation_id,
            correlation_id,
            clock,
        );
    }

    /// Wraps `kind` in metadata, applies it and queues it. Returns the new
    /// event's identifier.
    fn record(
        &mut self,
        kind: NavigationEventKind,
        correlation_id: Uuid,
        causation_id: Uuid,
        clock: &dyn Clock,
    ) -> Uuid {
        let metadata = EventMetadata::next(
            kind.event_type(),
            self.id,
            self.version,
            correlation_id,
            causation_id,
            clock,
        );
        let event_id = metadata.event_id;
        let event = NavigationEvent { metadata, kind };
        self.apply(&event);
        self.uncommitted_events.push(event);
        event_id
    }
}

impl AggregateRoot for NavigationEngine {
    type Event = NavigationEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            NavigationEventKind::MoveStarted(payload) => {
                // The overlay only ever describes the checkpoint under the token.
                self.state.animating = true;
                self.state.target_checkpoint = None;
                self.active_move = Some(ActiveMove {
                    checkpoint: payload.checkpoint,
                    destination: payload.destination_path_index,
                    direction: payload.direction,
                    correlation_id: event.metadata.correlation_id,
                    started_by: event.metadata.event_id,
                });
            }
            NavigationEventKind::MarkersEaten(payload) => {
                self.state.eaten_markers.extend(payload.dot_ids.iter().copied());
            }
            NavigationEventKind::MarkersRestored(payload) => {
                for id in &payload.dot_ids {
                    self.state.eaten_markers.remove(id);
                }
            }
            NavigationEventKind::TokenStepped(payload) => {
                self.state.current_path_index = payload.path_index;
                // Re-apply the optimistic reconciliation for the entered dot.
                let entered = self.path.point(payload.path_index).and_then(|p| p.dot_id());
                if let (Some(id), Some(active)) = (entered, self.active_move) {
                    match active.direction {
                        MoveDirection::Forward => {
                            self.state.eaten_markers.insert(id);
                        }
                        MoveDirection::Backward => {
                            self.state.eaten_markers.remove(&id);
                        }
                    }
                }
            }
            NavigationEventKind::CheckpointReached(payload) => {
                self.state.current_path_index = payload.path_index;
                self.state.animating = false;
                self.state.target_checkpoint = Some(payload.checkpoint);
                self.active_move = None;
            }
            NavigationEventKind::OverlayClosed(_) => {
                self.state.target_checkpoint = None;
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}
