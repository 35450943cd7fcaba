//! The console host: content selection, input routing and scene output.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;
use trail_content::{CheckpointContent, TimelineDocument};
use trail_core::clock::Clock;
use trail_core::scheduler::TickScheduler;
use trail_navigation::application::service::{
    NavigationHandle, NavigationService, TimelineSnapshot,
};
use trail_presentation::{
    GridLayout, InputRouter, Intent, Scene, SceneOptions, UiEvent, render_scene,
};

use crate::error::AppError;

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to redraw yet; a snapshot will follow if state changes.
    Continue,
    /// Content changed without a new snapshot; redraw the current one.
    Redraw,
}

/// Owns the selected content and talks to one navigation service.
pub struct TimelineHost {
    document: TimelineDocument,
    version: String,
    cutoff_year: Option<i32>,
    content: CheckpointContent,
    options: SceneOptions,
    handle: NavigationHandle,
    router: InputRouter,
}

impl TimelineHost {
    /// Selects `version` up to `cutoff_year` and spawns the navigation
    /// service for the matching checkpoints.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Domain` if the version does not exist or the
    /// settings are invalid.
    pub fn start(
        document: TimelineDocument,
        version: &str,
        cutoff_year: Option<i32>,
        scheduler: Arc<dyn TickScheduler>,
        clock: Arc<dyn Clock>,
    ) -> Result<(Self, JoinHandle<()>), AppError> {
        let content = document.content(version, cutoff_year)?;
        let checkpoints = document.checkpoint_set_for(&content)?;
        let (handle, task) = NavigationService::spawn(&checkpoints, scheduler, clock);
        let router = InputRouter::new(&handle.snapshot());
        let options = SceneOptions {
            marker_visibility: document.settings.marker_visibility,
            layout: GridLayout::new(document.settings.grid_size),
        };

        info!(version, entries = content.len(), "timeline host started");

        Ok((
            Self {
                document,
                version: version.to_owned(),
                cutoff_year,
                content,
                options,
                handle,
                router,
            },
            task,
        ))
    }

    /// The selected language version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The navigation handle.
    #[must_use]
    pub fn handle(&self) -> &NavigationHandle {
        &self.handle
    }

    /// A receiver for snapshot changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TimelineSnapshot> {
        self.handle.subscribe()
    }

    /// Routes a UI event and forwards its intents.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Domain` if the navigation service has stopped.
    pub fn handle_event(&self, event: UiEvent) -> Result<Vec<Intent>, AppError> {
        Ok(self.router.dispatch(event, &self.handle)?)
    }

    /// Switches the language version. The path is rebuilt only when the
    /// number of shown checkpoints changes.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Domain` if the version does not exist or the
    /// navigation service has stopped; the current version stays selected.
    pub fn switch_version(&mut self, version: &str) -> Result<Outcome, AppError> {
        let content = self.document.content(version, self.cutoff_year)?;
        let entries = content.len();
        let outcome = self.replace_content(content)?;
        self.version = version.to_owned();
        info!(version, entries, "version switched");
        Ok(outcome)
    }

    /// Changes the cutoff year and reselects the content.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Domain` if the navigation service has stopped.
    pub fn set_cutoff(&mut self, cutoff_year: i32) -> Result<Outcome, AppError> {
        let content = self.document.content(&self.version, Some(cutoff_year))?;
        let entries = content.len();
        let outcome = self.replace_content(content)?;
        self.cutoff_year = Some(cutoff_year);
        info!(cutoff_year, entries, "cutoff changed");
        Ok(outcome)
    }

    fn replace_content(&mut self, content: CheckpointContent) -> Result<Outcome, AppError> {
        let checkpoints = self.document.checkpoint_set_for(&content)?;
        let unchanged = checkpoints.fingerprint() == *self.handle.snapshot().fingerprint;
        self.handle.reload(checkpoints)?;
        self.content = content;
        Ok(if unchanged {
            Outcome::Redraw
        } else {
            Outcome::Continue
        })
    }

    /// Follows `snapshot` and renders its scene.
    pub fn render(&mut self, snapshot: &TimelineSnapshot) -> Scene {
        self.router.sync(snapshot);
        render_scene(snapshot, &self.content, &self.options)
    }

    /// Renders `snapshot` as one JSON line.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Output` if the scene cannot be serialized.
    pub fn scene_line(&mut self, snapshot: &TimelineSnapshot) -> Result<String, AppError> {
        Ok(serde_json::to_string(&self.render(snapshot))?)
    }
}
