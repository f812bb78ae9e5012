pub use score::{ScoreMatrix, UNCOMPUTED};
pub use trace::{Trace, TraceMatrix, ORIGIN};

mod score;
mod trace;

use derive_getters::Getters;

use super::ConsistencyError;

/// Dimensions of an alignment matrix, boundary row and column included.
///
/// Row `0` and column `0` are the boundary; interior cells are `1..rows` x `1..cols`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Shape of the matrix for sequences with `seq1` and `seq2` symbols.
    pub fn new(seq1: usize, seq2: usize) -> Self {
        Self {
            rows: seq1 + 1,
            cols: seq2 + 1,
        }
    }

    /// Number of symbols in the sequence along the rows.
    pub fn seq1(&self) -> usize {
        self.rows - 1
    }

    /// Number of symbols in the sequence along the columns.
    pub fn seq2(&self) -> usize {
        self.cols - 1
    }

    /// Number of interior (computable) cells.
    pub fn interior(&self) -> usize {
        self.seq1() * self.seq2()
    }

    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0
    }

    #[inline(always)]
    pub fn index(&self, row: usize, col: usize) -> Result<usize, ConsistencyError> {
        if row >= self.rows || col >= self.cols {
            return Err(ConsistencyError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Bounds-checked index of an interior cell.
    #[inline(always)]
    pub fn interior_index(&self, row: usize, col: usize) -> Result<usize, ConsistencyError> {
        let index = self.index(row, col)?;
        if self.is_boundary(row, col) {
            return Err(ConsistencyError::Boundary { row, col });
        }
        Ok(index)
    }
}
