//! Canonical checkpoint sets used across test suites.

use std::num::NonZeroU32;

use chrono::{DateTime, TimeZone, Utc};
use trail_path::{CheckpointSet, Coordinate, Path};

/// Fixed timestamp used across tests.
///
/// # Panics
///
/// Never; the literal date is valid.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// Three checkpoints in a row with four dots per segment. Checkpoints land on
/// path indices 4, 8 and 12; the token starts on the first dot at index 1.
///
/// # Panics
///
/// Never; four is non-zero.
#[must_use]
pub fn scenario_set() -> CheckpointSet {
    CheckpointSet {
        start: Coordinate::new(0.0, -1.0),
        checkpoints: vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 2.0),
        ],
        dots_per_segment: NonZeroU32::new(4).unwrap(),
    }
}

/// The path built from [`scenario_set`].
#[must_use]
pub fn scenario_path() -> Path {
    scenario_set().build()
}

/// Nine checkpoints snaking across a 3x3 grid, entered from the left.
///
/// # Panics
///
/// Never; seven is non-zero.
#[must_use]
pub fn zigzag_set() -> CheckpointSet {
    let snake = [
        (0.0, 0.0),
        (0.0, 1.0),
        (0.0, 2.0),
        (1.0, 2.0),
        (1.0, 1.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (2.0, 2.0),
    ];
    CheckpointSet {
        start: Coordinate::new(0.0, -0.7),
        checkpoints: snake
            .iter()
            .map(|&(row, col)| Coordinate::new(row, col))
            .collect(),
        dots_per_segment: NonZeroU32::new(7).unwrap(),
    }
}
