//! Checkpoint Trail — console host.
//!
//! Wires the content catalog, the navigation service and the presentation
//! layer together behind a line-based stdin protocol.

pub mod config;
pub mod console;
pub mod error;
pub mod host;
