//! Construction input for a path and its fingerprint.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::coordinate::Coordinate;
use crate::path::{Path, build};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Ordered checkpoint coordinates plus the parameters a path is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointSet {
    /// Where the token enters the timeline.
    pub start: Coordinate,
    /// Checkpoint coordinates in timeline order.
    pub checkpoints: Vec<Coordinate>,
    /// Dots per segment, counting the step onto the checkpoint.
    pub dots_per_segment: NonZeroU32,
}

impl CheckpointSet {
    /// Builds the path for this set.
    #[must_use]
    pub fn build(&self) -> Path {
        build(&self.checkpoints, self.start, self.dots_per_segment)
    }

    /// SHA-256 over every input that affects the built path, hex encoded.
    /// Equal fingerprints mean an existing path can be kept.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.dots_per_segment.get().to_le_bytes());
        hasher.update(self.start.row.to_bits().to_le_bytes());
        hasher.update(self.start.col.to_bits().to_le_bytes());
        hasher.update((self.checkpoints.len() as u64).to_le_bytes());
        for coordinate in &self.checkpoints {
            hasher.update(coordinate.row.to_bits().to_le_bytes());
            hasher.update(coordinate.col.to_bits().to_le_bytes());
        }

        hasher
            .finalize()
            .iter()
            .flat_map(|byte| [byte >> 4, byte & 0x0f])
            .map(|nibble| char::from(HEX_DIGITS[usize::from(nibble)]))
            .collect()
    }
}
