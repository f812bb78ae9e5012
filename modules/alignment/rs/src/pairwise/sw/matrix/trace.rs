use std::sync::atomic::{AtomicU8, Ordering};

use super::{ConsistencyError, Shape};

/// Origin of the matrix. Traceback ends once it reaches this cell.
pub const ORIGIN: (usize, usize) = (0, 0);

/// Direction that produced the score of a cell.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Trace {
    /// Alignment restarts here: the cell score was clamped to zero, or the cell is a boundary.
    Start = 0,
    /// Gap in the second sequence, came from `(row - 1, col)`.
    North = 1,
    /// Diagonal step, came from `(row - 1, col - 1)`.
    NorthWest = 2,
    /// Gap in the first sequence, came from `(row, col - 1)`.
    West = 3,
}

impl Trace {
    #[inline(always)]
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Trace::North,
            2 => Trace::NorthWest,
            3 => Trace::West,
            _ => Trace::Start,
        }
    }
}

/// Dense row-major table of predecessor directions, one per cell.
///
/// Each interior trace is written by the same worker that claimed the score of the cell,
/// right after the score itself.
pub struct TraceMatrix {
    shape: Shape,
    cells: Vec<AtomicU8>,
}

impl TraceMatrix {
    pub fn new(shape: Shape) -> Self {
        let cells = (0..shape.rows() * shape.cols())
            .map(|_| AtomicU8::new(Trace::Start as u8))
            .collect();
        Self { shape, cells }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Result<Trace, ConsistencyError> {
        let index = self.shape.index(row, col)?;
        Ok(Trace::from_u8(self.cells[index].load(Ordering::Acquire)))
    }

    #[inline(always)]
    pub fn set(&self, row: usize, col: usize, trace: Trace) -> Result<(), ConsistencyError> {
        let index = self.shape.interior_index(row, col)?;
        self.cells[index].store(trace as u8, Ordering::Release);
        Ok(())
    }

    /// Cell that the traceback moves to from `(row, col)`.
    ///
    /// Boundary cells and restarts lead to the [`ORIGIN`].
    pub fn predecessor(&self, row: usize, col: usize) -> Result<(usize, usize), ConsistencyError> {
        let pred = match self.get(row, col)? {
            Trace::Start => ORIGIN,
            Trace::North => (row - 1, col),
            Trace::NorthWest => (row - 1, col - 1),
            Trace::West => (row, col - 1),
        };
        Ok(pred)
    }
}
