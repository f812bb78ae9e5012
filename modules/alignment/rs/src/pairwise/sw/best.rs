use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use super::matrix::ScoreMatrix;
use super::ConsistencyError;
use crate::pairwise::scoring::Score;

/// Highest-scoring cell of a filled matrix, the end point of the local alignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Constructor, Getters, Dissolve)]
pub struct Best {
    score: Score,
    row: usize,
    col: usize,
}

impl Best {
    #[inline(always)]
    fn update(&mut self, row: usize, col: usize, score: Score) {
        if score > self.score {
            self.row = row;
            self.col = col;
            self.score = score;
        }
    }

    pub fn cell(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl Display for Best {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, [{}, {}])", self.score, self.row, self.col)
    }
}

/// Scans the interior from the bottom-right corner, rows outer and columns inner, both
/// descending. Only a strictly greater score replaces the current best, so among equal
/// maxima the one met first in this order wins. An all-zero matrix reports the corner itself.
pub fn find(scores: &ScoreMatrix) -> Result<Best, ConsistencyError> {
    let shape = scores.shape();
    let mut best = Best::new(0, shape.seq1(), shape.seq2());
    for row in (1..=shape.seq1()).rev() {
        for col in (1..=shape.seq2()).rev() {
            best.update(row, col, scores.get(row, col)?);
        }
    }
    Ok(best)
}
