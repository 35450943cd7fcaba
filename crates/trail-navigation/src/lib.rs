//! Checkpoint Trail — navigation engine bounded context.
//!
//! Owns the token position, the animating flag, the eaten-marker set and the
//! open-overlay target. Requests arrive as commands; every state change is a
//! domain event applied to the engine aggregate.

pub mod application;
pub mod domain;
