//! Checkpoint Trail — timeline content catalog.
//!
//! Loads the YAML timeline document: grid settings that produce the
//! checkpoint set, and per-version localized entries that give each
//! checkpoint its title, media and Markdown description.

pub mod document;
pub mod entry;
pub mod localization;
pub mod markdown;

pub use document::{MarkerVisibility, TimelineDocument, TimelineSettings};
pub use entry::{Extra, Media, TimelineEntry, Year};
pub use localization::{CheckpointContent, Localization};
pub use markdown::render_description;
