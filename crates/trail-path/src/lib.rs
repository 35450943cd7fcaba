//! Checkpoint Trail — path construction.
//!
//! Turns an ordered list of checkpoint coordinates into an immutable,
//! typed path of start, interpolated dots and checkpoints that a token
//! can traverse one index at a time.

pub mod checkpoint_set;
pub mod coordinate;
pub mod path;
pub mod point;

pub use checkpoint_set::CheckpointSet;
pub use coordinate::{Coordinate, Heading, heading};
pub use path::{Path, build};
pub use point::{DotId, PathPoint};
