//! The immutable traversal path.

use std::num::NonZeroU32;
use std::ops::RangeBounds;

use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::point::{DotId, PathPoint};

/// Ordered sequence of points the token can traverse:
/// `[Start, dots.., Checkpoint(0), dots.., Checkpoint(1), .., Checkpoint(N-1)]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    points: Vec<PathPoint>,
    /// Path index of each checkpoint, indexed by checkpoint ordinal.
    checkpoint_path_indices: Vec<usize>,
    dots_per_segment: u32,
}

/// Builds the path from `start` through every checkpoint in order.
///
/// Each segment receives `dots_per_segment - 1` dots at
/// `t = d / dots_per_segment`. No dots follow the final checkpoint. With no
/// checkpoints the path is just the start point.
#[must_use]
pub fn build(checkpoints: &[Coordinate], start: Coordinate, dots_per_segment: NonZeroU32) -> Path {
    let per = dots_per_segment.get();
    let mut points = Vec::with_capacity(1 + checkpoints.len() * per as usize);
    let mut checkpoint_path_indices = Vec::with_capacity(checkpoints.len());

    points.push(PathPoint::Start {
        row: start.row,
        col: start.col,
    });

    let mut from = start;
    for (segment, &to) in checkpoints.iter().enumerate() {
        for step in 1..per {
            let at = from.lerp(to, f64::from(step) / f64::from(per));
            points.push(PathPoint::Dot {
                row: at.row,
                col: at.col,
                id: DotId::new(segment, step),
            });
        }
        checkpoint_path_indices.push(points.len());
        points.push(PathPoint::Checkpoint {
            row: to.row,
            col: to.col,
            checkpoint_index: segment,
        });
        from = to;
    }

    Path {
        points,
        checkpoint_path_indices,
        dots_per_segment: per,
    }
}

impl Path {
    /// Number of points on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A path always holds at least its start point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in traversal order.
    #[must_use]
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// The point at `path_index`, if any.
    #[must_use]
    pub fn point(&self, path_index: usize) -> Option<&PathPoint> {
        self.points.get(path_index)
    }

    /// Dots emitted per segment, including the checkpoint step.
    #[must_use]
    pub fn dots_per_segment(&self) -> u32 {
        self.dots_per_segment
    }

    /// Number of checkpoints on the path.
    #[must_use]
    pub fn checkpoint_count(&self) -> usize {
        self.checkpoint_path_indices.len()
    }

    /// `false` when there are no checkpoints to navigate to.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        !self.checkpoint_path_indices.is_empty()
    }

    /// Path index of checkpoint `checkpoint`, precomputed at build time.
    #[must_use]
    pub fn path_index_of(&self, checkpoint: usize) -> Option<usize> {
        self.checkpoint_path_indices.get(checkpoint).copied()
    }

    /// Path indices of every checkpoint, in checkpoint order.
    #[must_use]
    pub fn checkpoint_path_indices(&self) -> &[usize] {
        &self.checkpoint_path_indices
    }

    /// The checkpoint ordinal at `path_index`, if that point is a checkpoint.
    #[must_use]
    pub fn checkpoint_at(&self, path_index: usize) -> Option<usize> {
        self.point(path_index).and_then(PathPoint::checkpoint_index)
    }

    /// Path index of the first dot, if the path has any.
    #[must_use]
    pub fn first_dot_index(&self) -> Option<usize> {
        self.points.iter().position(PathPoint::is_dot)
    }

    /// Where the token rests when the engine starts: the first dot, or the
    /// start point if there are no dots.
    #[must_use]
    pub fn initial_index(&self) -> usize {
        self.first_dot_index().unwrap_or(0)
    }

    /// Every dot with its path index, in traversal order.
    pub fn dots(&self) -> impl Iterator<Item = (usize, DotId)> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(index, point)| point.dot_id().map(|id| (index, id)))
    }

    /// Dot ids whose path index lies in `range`.
    pub fn dots_in(
        &self,
        range: impl RangeBounds<usize>,
    ) -> impl Iterator<Item = DotId> + '_ {
        let range = (range.start_bound().cloned(), range.end_bound().cloned());
        self.dots()
            .filter(move |(index, _)| range.contains(index))
            .map(|(_, id)| id)
    }
}
