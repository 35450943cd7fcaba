//! Tick-driven navigation service.
//!
//! One tokio task owns the engine. Requests arrive over a channel, ticks come
//! from a [`TickScheduler`], and every state change is published as a
//! [`TimelineSnapshot`] on a watch channel. While a move is in flight exactly
//! one tick is pending; the next one is requested only after it fires.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};
use trail_core::clock::Clock;
use trail_core::error::DomainError;
use trail_core::scheduler::TickScheduler;
use trail_path::{CheckpointSet, Path};
use uuid::Uuid;

use crate::application::command_handlers::{
    handle_close_overlay, handle_request_navigation, handle_tick,
};
use crate::application::query_handlers::{NavigationView, get_navigation_view};
use crate::domain::aggregates::NavigationEngine;
use crate::domain::commands::{CloseOverlay, RequestNavigation};
use crate::domain::state::TickOutcome;

type TickFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Messages accepted by the service task.
#[derive(Debug)]
pub enum NavigationCommand {
    /// Move the token to a checkpoint.
    RequestNavigation(RequestNavigation),
    /// Close the detail overlay.
    CloseOverlay(CloseOverlay),
    /// Replace the checkpoint set; ignored when its fingerprint is unchanged.
    Reload(CheckpointSet),
}

/// Everything a renderer needs: the path and the engine's read model.
#[derive(Debug, Clone)]
pub struct TimelineSnapshot {
    /// The path being navigated.
    pub path: Arc<Path>,
    /// Fingerprint of the checkpoint set the path was built from.
    pub fingerprint: Arc<str>,
    /// Navigation state at the time of publishing.
    pub view: NavigationView,
}

/// Cloneable handle used by collaborators to talk to the service.
#[derive(Debug, Clone)]
pub struct NavigationHandle {
    commands: mpsc::UnboundedSender<NavigationCommand>,
    snapshots: watch::Receiver<TimelineSnapshot>,
}

impl NavigationHandle {
    /// Asks the engine to move to `checkpoint`. Returns the correlation ID.
    /// Requests that arrive mid-move are dropped by the engine.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the service has stopped.
    pub fn request_navigation(&self, checkpoint: usize) -> Result<Uuid, DomainError> {
        let correlation_id = Uuid::new_v4();
        self.send(NavigationCommand::RequestNavigation(RequestNavigation {
            correlation_id,
            checkpoint,
        }))?;
        Ok(correlation_id)
    }

    /// Asks the engine to close the overlay. Returns the correlation ID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the service has stopped.
    pub fn close_overlay(&self) -> Result<Uuid, DomainError> {
        let correlation_id = Uuid::new_v4();
        self.send(NavigationCommand::CloseOverlay(CloseOverlay { correlation_id }))?;
        Ok(correlation_id)
    }

    /// Offers a new checkpoint set; the path is rebuilt only if it differs.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the service has stopped.
    pub fn reload(&self, checkpoints: CheckpointSet) -> Result<(), DomainError> {
        self.send(NavigationCommand::Reload(checkpoints))
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> TimelineSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver notified on every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TimelineSnapshot> {
        self.snapshots.clone()
    }

    fn send(&self, command: NavigationCommand) -> Result<(), DomainError> {
        self.commands
            .send(command)
            .map_err(|_| DomainError::Infrastructure("navigation service has stopped".to_owned()))
    }
}

/// The task that owns the engine.
pub struct NavigationService {
    engine: NavigationEngine,
    fingerprint: Arc<str>,
    scheduler: Arc<dyn TickScheduler>,
    clock: Arc<dyn Clock>,
    commands: mpsc::UnboundedReceiver<NavigationCommand>,
    snapshots: watch::Sender<TimelineSnapshot>,
}

impl NavigationService {
    /// Builds the path for `checkpoints` and spawns the service on the current
    /// tokio runtime. The task ends once every handle has been dropped.
    #[must_use]
    pub fn spawn(
        checkpoints: &CheckpointSet,
        scheduler: Arc<dyn TickScheduler>,
        clock: Arc<dyn Clock>,
    ) -> (NavigationHandle, JoinHandle<()>) {
        let engine = NavigationEngine::new(Uuid::new_v4(), Arc::new(checkpoints.build()));
        let fingerprint: Arc<str> = checkpoints.fingerprint().into();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(snapshot_of(&engine, &fingerprint));

        info!(
            engine_id = %engine.id,
            checkpoints = engine.path().checkpoint_count(),
            path_len = engine.path().len(),
            "navigation service starting"
        );

        let service = Self {
            engine,
            fingerprint,
            scheduler,
            clock,
            commands: command_rx,
            snapshots: snapshot_tx,
        };
        let task = tokio::spawn(service.run());

        (
            NavigationHandle {
                commands: command_tx,
                snapshots: snapshot_rx,
            },
            task,
        )
    }

    async fn run(mut self) {
        let scheduler = Arc::clone(&self.scheduler);
        let mut pending_tick: Option<TickFuture<'_>> = None;

        loop {
            if self.engine.is_animating() && pending_tick.is_none() {
                pending_tick = Some(scheduler.next_tick());
            }

            tokio::select! {
                biased;
                command = self.commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    self.dispatch(command);
                    if !self.engine.is_animating() {
                        pending_tick = None;
                    }
                }
                () = wait_for(&mut pending_tick) => {
                    pending_tick = None;
                    self.step();
                }
            }
        }

        info!(engine_id = %self.engine.id, "navigation service stopped");
    }

    fn dispatch(&mut self, command: NavigationCommand) {
        match command {
            NavigationCommand::RequestNavigation(command) => {
                match handle_request_navigation(&command, &mut self.engine, self.clock.as_ref()) {
                    Ok(_) => self.publish(),
                    Err(err) if err.is_rejection() => {
                        debug!(
                            correlation_id = %command.correlation_id,
                            checkpoint = command.checkpoint,
                            %err,
                            "navigation request dropped"
                        );
                    }
                    Err(err) => {
                        warn!(correlation_id = %command.correlation_id, %err, "navigation request failed");
                    }
                }
            }
            NavigationCommand::CloseOverlay(command) => {
                let result = handle_close_overlay(&command, &mut self.engine, self.clock.as_ref());
                if !result.events.is_empty() {
                    self.publish();
                }
            }
            NavigationCommand::Reload(checkpoints) => self.reload(&checkpoints),
        }
    }

    fn step(&mut self) {
        let (outcome, result) = handle_tick(&mut self.engine, self.clock.as_ref());
        if outcome == TickOutcome::Idle {
            return;
        }
        trace!(?outcome, events = result.events.len(), "token stepped");
        self.publish();
    }

    fn reload(&mut self, checkpoints: &CheckpointSet) {
        let fingerprint = checkpoints.fingerprint();
        if *self.fingerprint == *fingerprint {
            debug!(%fingerprint, "checkpoint set unchanged, keeping path");
            return;
        }

        if self.engine.is_animating() {
            debug!(engine_id = %self.engine.id, "abandoning move in flight for new path");
        }
        self.engine = NavigationEngine::new(Uuid::new_v4(), Arc::new(checkpoints.build()));
        self.fingerprint = fingerprint.into();
        info!(
            engine_id = %self.engine.id,
            checkpoints = self.engine.path().checkpoint_count(),
            "path rebuilt for new checkpoint set"
        );
        self.publish();
    }

    fn publish(&self) {
        self.snapshots
            .send_replace(snapshot_of(&self.engine, &self.fingerprint));
    }
}

fn snapshot_of(engine: &NavigationEngine, fingerprint: &Arc<str>) -> TimelineSnapshot {
    TimelineSnapshot {
        path: Arc::clone(engine.path()),
        fingerprint: Arc::clone(fingerprint),
        view: get_navigation_view(engine),
    }
}

async fn wait_for(tick: &mut Option<TickFuture<'_>>) {
    match tick {
        Some(tick) => tick.await,
        None => std::future::pending().await,
    }
}
