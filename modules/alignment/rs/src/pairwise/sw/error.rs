use derive_more::{Display, Error};

/// Invariant violations of the dependency-respecting fill.
///
/// Each one means that a scheduler or an index computation is wrong. The run is aborted.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Display, Error)]
pub enum ConsistencyError {
    #[display("cell ({row}, {col}) lies on the boundary and is never computed by the recurrence")]
    Boundary { row: usize, col: usize },
    #[display("cell ({row}, {col}) lies outside of the {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[display("cell ({row}, {col}) was read before it was computed")]
    Uncomputed { row: usize, col: usize },
    #[display("cell ({row}, {col}) was written more than once")]
    Rewritten { row: usize, col: usize },
    #[display("fill finished with {missing} uncomputed cells, first at ({row}, {col})")]
    Incomplete {
        row: usize,
        col: usize,
        missing: usize,
    },
    #[display("traceback from ({row}, {col}) did not reach the origin within {limit} steps")]
    Runaway { row: usize, col: usize, limit: usize },
}
