use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

use super::{ConsistencyError, Shape};
use crate::pairwise::scoring::Score;

/// Marker stored in interior cells that were not computed yet.
pub const UNCOMPUTED: Score = Score::MIN;

/// Dense row-major table of best local alignment scores.
///
/// Boundary cells hold `0` from the start. Every interior cell transitions exactly once from
/// [`UNCOMPUTED`] to its final value, so concurrent workers can share the matrix by reference.
/// A successful [`ScoreMatrix::get`] happens-after the [`ScoreMatrix::set`] that produced the value.
pub struct ScoreMatrix {
    shape: Shape,
    cells: Vec<AtomicI32>,
    writes: AtomicUsize,
}

impl ScoreMatrix {
    pub fn new(shape: Shape) -> Self {
        let mut cells = Vec::with_capacity(shape.rows() * shape.cols());
        for row in 0..*shape.rows() {
            for col in 0..*shape.cols() {
                let init = if shape.is_boundary(row, col) { 0 } else { UNCOMPUTED };
                cells.push(AtomicI32::new(init));
            }
        }
        Self {
            shape,
            cells,
            writes: AtomicUsize::new(0),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Reads a computed cell, boundary included.
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Result<Score, ConsistencyError> {
        let index = self.shape.index(row, col)?;
        match self.cells[index].load(Ordering::Acquire) {
            UNCOMPUTED => Err(ConsistencyError::Uncomputed { row, col }),
            score => Ok(score),
        }
    }

    /// Stores the final value of an interior cell. A second write to the same cell is an error.
    #[inline(always)]
    pub fn set(&self, row: usize, col: usize, score: Score) -> Result<(), ConsistencyError> {
        let index = self.shape.interior_index(row, col)?;
        debug_assert!(score >= 0, "local alignment scores are never negative");
        self.cells[index]
            .compare_exchange(UNCOMPUTED, score, Ordering::Release, Ordering::Relaxed)
            .map_err(|_| ConsistencyError::Rewritten { row, col })?;
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Number of successful interior writes so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Acquire)
    }

    /// Fails if any interior cell is still uncomputed.
    pub fn ensure_complete(&self) -> Result<(), ConsistencyError> {
        let missing = self.shape.interior() - self.writes();
        if missing == 0 {
            return Ok(());
        }

        let cols = *self.shape.cols();
        let first = self
            .cells
            .iter()
            .position(|x| x.load(Ordering::Acquire) == UNCOMPUTED)
            .unwrap_or_default();
        Err(ConsistencyError::Incomplete {
            row: first / cols,
            col: first % cols,
            missing,
        })
    }

    /// Snapshot of a single row. Uncomputed cells are reported as `None`.
    pub fn row(&self, row: usize) -> Result<Vec<Option<Score>>, ConsistencyError> {
        let start = self.shape.index(row, 0)?;
        let cols = *self.shape.cols();
        Ok(self.cells[start..start + cols]
            .iter()
            .map(|x| match x.load(Ordering::Acquire) {
                UNCOMPUTED => None,
                score => Some(score),
            })
            .collect())
    }
}
