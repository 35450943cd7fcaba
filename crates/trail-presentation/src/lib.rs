//! Checkpoint Trail — presentation boundary.
//!
//! Turns navigation snapshots into a serializable [`Scene`] and raw UI
//! events into [`Intent`]s. Nothing here mutates the path or the navigation
//! state; intents are forwarded to a `NavigationHandle`.

pub mod input;
pub mod layout;
pub mod scene;

pub use input::{InputRouter, Intent, Key, OverlayListeners, PointerTarget, UiEvent};
pub use layout::{GridLayout, Position};
pub use scene::{
    CheckpointView, MarkerView, OverlayView, RouteView, Scene, SceneOptions, TokenView,
    render_scene,
};
