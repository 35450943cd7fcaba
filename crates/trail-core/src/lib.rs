//! Trail Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the path,
//! navigation and presentation crates depend on. It contains no domain logic.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod scheduler;
