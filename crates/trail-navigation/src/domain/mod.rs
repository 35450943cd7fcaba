//! Domain layer: engine aggregate, commands, events and state.

pub mod aggregates;
pub mod commands;
pub mod events;
pub mod state;
