use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{ensure, Result};

use parsw_core_rs::Alignable;

use super::matrix::{ScoreMatrix, Shape, Trace, TraceMatrix};
use super::ConsistencyError;
use crate::pairwise::scoring::{Scheme, Score};

/// Final value of a single cell together with the direction that produced it.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor, Getters, Dissolve)]
pub struct Cell {
    score: Score,
    trace: Trace,
}

/// The Smith-Waterman recurrence with a linear gap penalty, bound to a pair of sequences and
/// the matrices it fills.
///
/// Candidates are compared in the order north, northwest, west and a later candidate wins only
/// if it is strictly greater. Negative winners are clamped to a zero-score restart.
pub struct Recurrence<'a, S1, S2> {
    seq1: &'a S1,
    seq2: &'a S2,
    scheme: &'a Scheme,
    scores: &'a ScoreMatrix,
    traces: &'a TraceMatrix,
}

impl<'a, S1, S2> Recurrence<'a, S1, S2>
where
    S1: Alignable<Symbol = u8>,
    S2: Alignable<Symbol = u8>,
{
    pub fn new(
        seq1: &'a S1,
        seq2: &'a S2,
        scheme: &'a Scheme,
        scores: &'a ScoreMatrix,
        traces: &'a TraceMatrix,
    ) -> Result<Self> {
        let expected = Shape::new(seq1.len(), seq2.len());
        ensure!(
            *scores.shape() == expected && *traces.shape() == expected,
            "Matrix shapes {:?} / {:?} don't match the sequence lengths {} x {}",
            scores.shape(),
            traces.shape(),
            seq1.len(),
            seq2.len()
        );
        ensure!(
            *scheme.gap_penalty() >= 0 && *scheme.match_bonus() >= 0,
            "Gap penalty and match bonus must be non-negative, got {} and {}",
            scheme.gap_penalty(),
            scheme.match_bonus()
        );
        // Scores never exceed the bonus times the shorter length
        let shorter = Score::try_from(seq1.len().min(seq2.len())).ok();
        ensure!(
            shorter
                .and_then(|n| scheme.match_bonus().checked_mul(n))
                .is_some(),
            "Match bonus {} overflows the score range for sequences of {} and {} symbols",
            scheme.match_bonus(),
            seq1.len(),
            seq2.len()
        );
        Ok(Self {
            seq1,
            seq2,
            scheme,
            scores,
            traces,
        })
    }

    pub fn shape(&self) -> &Shape {
        self.scores.shape()
    }

    pub fn scores(&self) -> &'a ScoreMatrix {
        self.scores
    }

    pub fn traces(&self) -> &'a TraceMatrix {
        self.traces
    }

    pub fn scheme(&self) -> &'a Scheme {
        self.scheme
    }

    /// Evaluates an interior cell from its north, northwest and west neighbours.
    /// Nothing is written.
    #[inline(always)]
    pub fn evaluate(&self, row: usize, col: usize) -> Result<Cell, ConsistencyError> {
        self.shape().interior_index(row, col)?;
        let west = self.scores.get(row, col - 1)?;
        self.evaluate_with(row, col, Some(west))
    }

    /// Same as [`Recurrence::evaluate`], but the west neighbour is supplied by the caller.
    /// `None` drops the west candidate altogether.
    #[inline(always)]
    pub fn evaluate_with(
        &self,
        row: usize,
        col: usize,
        west: Option<Score>,
    ) -> Result<Cell, ConsistencyError> {
        self.shape().interior_index(row, col)?;
        let gap = self.scheme.gap();
        let similarity = self
            .scheme
            .similarity(*self.seq1.at(row - 1), *self.seq2.at(col - 1));

        let mut best = Cell::new(self.scores.get(row - 1, col)? - gap, Trace::North);

        let northwest = self.scores.get(row - 1, col - 1)? + similarity;
        if northwest > best.score {
            best = Cell::new(northwest, Trace::NorthWest);
        }

        if let Some(west) = west {
            let west = west - gap;
            if west > best.score {
                best = Cell::new(west, Trace::West);
            }
        }

        if best.score < 0 {
            best = Cell::new(0, Trace::Start);
        }
        Ok(best)
    }

    /// Evaluates the cell and stores the result. Fails if the cell was already computed.
    #[inline(always)]
    pub fn commit(&self, row: usize, col: usize) -> Result<Cell, ConsistencyError> {
        let cell = self.evaluate(row, col)?;
        self.store(row, col, cell)
    }

    /// Same as [`Recurrence::commit`] with an explicit west neighbour.
    #[inline(always)]
    pub fn commit_with(
        &self,
        row: usize,
        col: usize,
        west: Option<Score>,
    ) -> Result<Cell, ConsistencyError> {
        let cell = self.evaluate_with(row, col, west)?;
        self.store(row, col, cell)
    }

    #[inline(always)]
    fn store(&self, row: usize, col: usize, cell: Cell) -> Result<Cell, ConsistencyError> {
        // The score claims the cell, a rejected write leaves the trace untouched
        self.scores.set(row, col, cell.score)?;
        self.traces.set(row, col, cell.trace)?;
        Ok(cell)
    }
}
