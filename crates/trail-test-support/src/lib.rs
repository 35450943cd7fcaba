//! Shared test doubles and fixtures for the checkpoint trail engine.

mod clock;
mod documents;
mod fixtures;
mod scheduler;

pub use clock::{FixedClock, SteppingClock};
pub use documents::SAMPLE_TIMELINE_YAML;
pub use fixtures::{fixed_now, scenario_path, scenario_set, zigzag_set};
pub use scheduler::{GatedScheduler, InstantScheduler};
