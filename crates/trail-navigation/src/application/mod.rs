//! Application layer: command handlers, read models and the tick-driven
//! navigation service.

pub mod command_handlers;
pub mod query_handlers;
pub mod service;
