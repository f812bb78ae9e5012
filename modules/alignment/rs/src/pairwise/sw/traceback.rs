use std::fmt::{Display, Formatter};

use derive_more::{From, Into};
use itertools::Itertools;

use super::matrix::{TraceMatrix, ORIGIN};
use super::ConsistencyError;

/// Cells visited by the traceback, ordered from the alignment start to its end.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, From, Into)]
pub struct Path(Vec<(usize, usize)>);

impl Path {
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&(usize, usize)> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&(usize, usize)> {
        self.0.last()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0.iter().map(|(r, c)| format!("[{r}, {c}]")).join(" ")
        )
    }
}

/// Follows predecessors from `start` until the origin is reached.
///
/// The origin itself is not part of the path, `start` always is. The walk is bounded by the sum
/// of both sequence lengths, every step decreases the row or the column.
pub fn trace(traces: &TraceMatrix, start: (usize, usize)) -> Result<Path, ConsistencyError> {
    let shape = traces.shape();
    let (row, col) = start;
    shape.index(row, col)?;

    let limit = shape.seq1() + shape.seq2();
    let mut path = Vec::with_capacity(shape.seq1().min(shape.seq2()) + 1);
    path.push(start);

    let mut cell = traces.predecessor(row, col)?;
    while cell != ORIGIN {
        if path.len() > limit {
            return Err(ConsistencyError::Runaway { row, col, limit });
        }
        path.push(cell);
        cell = traces.predecessor(cell.0, cell.1)?;
    }

    path.reverse();
    Ok(Path(path))
}
