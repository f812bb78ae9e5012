use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};

use parsw_core_rs::Alignable;

use super::op::Op;
use super::step::Step;
use crate::pairwise::scoring::{Scheme, Score};
use crate::pairwise::sw::matrix::TraceMatrix;
use crate::pairwise::sw::traceback::Path;
use crate::pairwise::sw::ConsistencyError;

/// Local alignment between two sequences, summarized as runs of operations.
///
/// Ranges are 0-based, half-open positions of the aligned symbols in each sequence.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve, From, Into)]
pub struct Alignment {
    score: Score,
    steps: Vec<Step>,
    seq1: Range<usize>,
    seq2: Range<usize>,
}

impl Alignment {
    /// Summarizes a traceback path. Every path cell contributes the operation stored in its
    /// trace; restarts and boundary cells contribute nothing.
    pub fn from_path<S1, S2>(
        score: Score,
        path: &Path,
        traces: &TraceMatrix,
        seq1: &S1,
        seq2: &S2,
        scheme: &Scheme,
    ) -> Result<Self, ConsistencyError>
    where
        S1: Alignable<Symbol = u8>,
        S2: Alignable<Symbol = u8>,
    {
        let mut steps = Vec::with_capacity(path.len());
        let (mut consumed1, mut consumed2) = (0, 0);
        for &(row, col) in path.cells() {
            let trace = traces.get(row, col)?;
            let op = Op::from_trace(trace, || {
                scheme.classify(*seq1.at(row - 1), *seq2.at(col - 1))
            });
            if let Some(op) = op {
                let (c1, c2) = op.consumes(1);
                consumed1 += c1;
                consumed2 += c2;
                steps.push(Step::single(op));
            }
        }
        Step::collapse(&mut steps);

        let (end1, end2) = path.last().copied().unwrap_or_default();
        Ok(Self {
            score,
            steps,
            seq1: end1.saturating_sub(consumed1)..end1,
            seq2: end2.saturating_sub(consumed2)..end2,
        })
    }

    /// Checks if the alignment is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total number of operations.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|x| *x.len()).sum()
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }
}
