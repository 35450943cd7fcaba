//! Command handlers for the navigation context.
//!
//! This module contains application-level handler functions that orchestrate
//! domain logic: execute the command against the engine, then drain the
//! events it recorded so callers can publish them.

use tracing::{debug, info, instrument};
use trail_core::aggregate::AggregateRoot;
use trail_core::clock::Clock;
use trail_core::command::Command;
use trail_core::error::DomainError;
use trail_core::scheduler::TickScheduler;
use uuid::Uuid;

use crate::domain::aggregates::NavigationEngine;
use crate::domain::commands::{CloseOverlay, RequestNavigation};
use crate::domain::events::NavigationEvent;
use crate::domain::state::TickOutcome;

/// Result of a successfully handled command.
#[derive(Debug)]
pub struct NavigationCommandResult {
    /// The engine affected by the command.
    pub engine_id: Uuid,
    /// The events recorded while handling the command.
    pub events: Vec<NavigationEvent>,
}

fn drain(engine: &mut NavigationEngine) -> NavigationCommandResult {
    NavigationCommandResult {
        engine_id: engine.aggregate_id(),
        events: engine.drain_uncommitted_events(),
    }
}

/// Handles the `RequestNavigation` command: validates and starts the move,
/// reconciling eaten markers up front.
///
/// # Errors
///
/// Returns the engine's rejection (`MoveInFlight`, `CheckpointOutOfRange`,
/// `AlreadyAtCheckpoint`) when the request is refused; state is unchanged.
#[instrument(skip(engine, clock), fields(engine_id = %engine.aggregate_id()))]
pub fn handle_request_navigation(
    command: &RequestNavigation,
    engine: &mut NavigationEngine,
    clock: &dyn Clock,
) -> Result<NavigationCommandResult, DomainError> {
    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id,
        checkpoint = command.checkpoint,
        "handling request_navigation command"
    );

    engine.request_navigation(command.checkpoint, command.correlation_id, clock)?;

    Ok(drain(engine))
}

/// Handles the `CloseOverlay` command. Closing an already closed overlay
/// yields a result with no events.
#[instrument(skip(engine, clock), fields(engine_id = %engine.aggregate_id()))]
pub fn handle_close_overlay(
    command: &CloseOverlay,
    engine: &mut NavigationEngine,
    clock: &dyn Clock,
) -> NavigationCommandResult {
    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id,
        "handling close_overlay command"
    );

    engine.close_overlay(command.correlation_id, clock);

    drain(engine)
}

/// Advances the engine by one tick and drains the resulting events.
pub fn handle_tick(
    engine: &mut NavigationEngine,
    clock: &dyn Clock,
) -> (TickOutcome, NavigationCommandResult) {
    let outcome = engine.tick(clock);
    if let TickOutcome::Arrived { checkpoint } = outcome {
        debug!(engine_id = %engine.aggregate_id(), checkpoint, "token arrived");
    }
    (outcome, drain(engine))
}

/// Drives an in-flight move to rest, waiting for one scheduler tick before
/// every step. Returns all events recorded on the way. Returns immediately
/// when the engine is idle.
pub async fn drive_to_rest(
    engine: &mut NavigationEngine,
    scheduler: &dyn TickScheduler,
    clock: &dyn Clock,
) -> Vec<NavigationEvent> {
    let mut events = Vec::new();
    while engine.is_animating() {
        scheduler.next_tick().await;
        let (_, result) = handle_tick(engine, clock);
        events.extend(result.events);
    }
    events
}
