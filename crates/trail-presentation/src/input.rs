//! Input routing from UI events to navigation intents.
//!
//! Dismissal through Escape or a pointer outside the detail card only works
//! while an overlay is open. That window is modelled by [`OverlayListeners`],
//! which exist exactly as long as the overlay does.

use tracing::debug;
use trail_core::error::DomainError;
use trail_navigation::application::service::{NavigationHandle, TimelineSnapshot};
use trail_navigation::domain::state::NavigationState;

/// What a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A checkpoint marker.
    Checkpoint(usize),
    /// The overlay's close button.
    CloseButton,
    /// Anywhere inside the detail card except the close button.
    DetailSurface,
    /// Anywhere else.
    Outside,
}

/// Keys the timeline reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Activates the focused marker.
    Enter,
    /// Activates the focused marker.
    Space,
    /// Dismisses the overlay.
    Escape,
}

/// A raw UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Pointer press.
    Pointer(PointerTarget),
    /// Key press, with the focused checkpoint marker if any.
    Key {
        /// The key.
        key: Key,
        /// Focused checkpoint marker.
        focused: Option<usize>,
    },
}

/// A request for the navigation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move to a checkpoint.
    RequestNavigation(usize),
    /// Close the overlay.
    CloseOverlay,
}

/// Document-level dismissal listeners for an open overlay. Detached on drop.
#[derive(Debug)]
pub struct OverlayListeners {
    checkpoint: usize,
}

impl OverlayListeners {
    fn attach(checkpoint: usize) -> Self {
        debug!(checkpoint, "overlay listeners attached");
        Self { checkpoint }
    }

    /// Checkpoint whose overlay these listeners belong to.
    #[must_use]
    pub fn checkpoint(&self) -> usize {
        self.checkpoint
    }
}

impl Drop for OverlayListeners {
    fn drop(&mut self) {
        debug!(checkpoint = self.checkpoint, "overlay listeners detached");
    }
}

/// Turns UI events into intents based on the last synced snapshot.
#[derive(Debug, Default)]
pub struct InputRouter {
    listeners: Option<OverlayListeners>,
    interactive: bool,
    checkpoint_count: usize,
}

impl InputRouter {
    /// A router synced to `snapshot`.
    #[must_use]
    pub fn new(snapshot: &TimelineSnapshot) -> Self {
        let mut router = Self::default();
        router.sync(snapshot);
        router
    }

    /// Follows a new snapshot: attaches listeners when an overlay opens,
    /// detaches them when it closes or moves to another checkpoint.
    pub fn sync(&mut self, snapshot: &TimelineSnapshot) {
        let state: &NavigationState = &snapshot.view.state;
        self.interactive = !state.animating;
        self.checkpoint_count = snapshot.path.checkpoint_count();

        let attached = self.listeners.as_ref().map(OverlayListeners::checkpoint);
        if attached != state.target_checkpoint {
            self.listeners = None;
            self.listeners = state.target_checkpoint.map(OverlayListeners::attach);
        }
    }

    /// The listeners currently attached, if an overlay is open.
    #[must_use]
    pub fn listeners(&self) -> Option<&OverlayListeners> {
        self.listeners.as_ref()
    }

    /// Intents for `event`, in the order they should be sent.
    #[must_use]
    pub fn route(&self, event: UiEvent) -> Vec<Intent> {
        let listening = self.listeners.is_some();
        match event {
            UiEvent::Pointer(PointerTarget::DetailSurface) => Vec::new(),
            UiEvent::Pointer(PointerTarget::CloseButton | PointerTarget::Outside)
            | UiEvent::Key {
                key: Key::Escape, ..
            } => {
                if listening {
                    vec![Intent::CloseOverlay]
                } else {
                    Vec::new()
                }
            }
            UiEvent::Pointer(PointerTarget::Checkpoint(k)) => {
                let mut intents = Vec::with_capacity(2);
                if listening {
                    intents.push(Intent::CloseOverlay);
                }
                intents.extend(self.activate(k));
                intents
            }
            UiEvent::Key {
                key: Key::Enter | Key::Space,
                focused,
            } => focused.and_then(|k| self.activate(k)).into_iter().collect(),
        }
    }

    /// Routes `event` and forwards the intents to `handle`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the service has stopped.
    pub fn dispatch(
        &self,
        event: UiEvent,
        handle: &NavigationHandle,
    ) -> Result<Vec<Intent>, DomainError> {
        let intents = self.route(event);
        for intent in &intents {
            match *intent {
                Intent::RequestNavigation(k) => {
                    handle.request_navigation(k)?;
                }
                Intent::CloseOverlay => {
                    handle.close_overlay()?;
                }
            }
        }
        Ok(intents)
    }

    fn activate(&self, k: usize) -> Option<Intent> {
        (self.interactive && k < self.checkpoint_count).then_some(Intent::RequestNavigation(k))
    }
}
