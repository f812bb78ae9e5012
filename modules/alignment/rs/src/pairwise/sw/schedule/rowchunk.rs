use derive_getters::{Dissolve, Getters};
use eyre::Result;
use itertools::Itertools;
use log::{debug, warn};
use rayon::prelude::*;
use rayon::ThreadPool;

use parsw_core_rs::Alignable;

use super::{ChunkPolicy, FillStats, Tally};
use crate::pairwise::scoring::Score;
use crate::pairwise::sw::recurrence::Recurrence;
use crate::pairwise::sw::ConsistencyError;

/// Contiguous run of interior columns `start..=end` within a single row.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Chunk {
    row: usize,
    start: usize,
    end: usize,
}

impl Chunk {
    pub fn width(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Score of the last cell of the chunk as if nothing entered it from the west.
    ///
    /// Only the previous row is read and nothing is written, so all chunks of a row can be
    /// evaluated at the same time.
    pub fn tail<S1, S2>(&self, rec: &Recurrence<S1, S2>) -> Result<Score, ConsistencyError>
    where
        S1: Alignable<Symbol = u8>,
        S2: Alignable<Symbol = u8>,
    {
        let mut west = None;
        for col in self.start..=self.end {
            west = Some(*rec.evaluate_with(self.row, col, west)?.score());
        }
        Ok(west.unwrap_or_default())
    }

    /// Commits every cell of the chunk, left to right. `carry` is the final score of the cell
    /// directly west of the chunk.
    pub fn commit<S1, S2>(
        &self,
        rec: &Recurrence<S1, S2>,
        carry: Score,
    ) -> Result<(), ConsistencyError>
    where
        S1: Alignable<Symbol = u8>,
        S2: Alignable<Symbol = u8>,
    {
        rec.commit_with(self.row, self.start, Some(carry))?;
        for col in self.start + 1..=self.end {
            rec.commit(self.row, col)?;
        }
        Ok(())
    }
}

/// Splits columns `1..=cols` of a row into at most `chunks` contiguous, non-empty chunks that
/// cover every column exactly once.
pub fn split(row: usize, cols: usize, chunks: usize) -> Vec<Chunk> {
    let chunks = chunks.clamp(1, cols.max(1));
    (0..chunks)
        .map(|k| Chunk {
            row,
            start: k * cols / chunks + 1,
            end: (k + 1) * cols / chunks,
        })
        .filter(|x| x.start <= x.end)
        .collect()
}

/// Scores entering each chunk from the west.
///
/// The score of a cell is the best of what its own column offers and of the west neighbour
/// minus the gap. Across a chunk of width `w` the west contribution therefore decays by exactly
/// `w * gap`, and the true score at the chunk end is the larger of the chunk's own tail and the
/// decayed carry.
fn carries(chunks: &[Chunk], tails: &[Score], gap: Score) -> Vec<Score> {
    let mut carries = Vec::with_capacity(chunks.len());
    let mut carry: Score = 0;
    for (chunk, tail) in chunks.iter().zip_eq(tails) {
        carries.push(carry);
        let width = Score::try_from(chunk.width()).unwrap_or(Score::MAX);
        carry = (*tail).max(carry.saturating_sub(gap.saturating_mul(width)));
    }
    carries
}

/// Row-by-row fill. Every row is split into column chunks according to `policy`.
///
/// Chunks of a row are processed in two parallel passes: the first one evaluates chunk tails
/// without writing anything, the second one commits the cells once the west carry of every chunk
/// is known.
pub fn fill<S1, S2>(
    rec: &Recurrence<S1, S2>,
    policy: &ChunkPolicy,
    pool: &ThreadPool,
) -> Result<FillStats>
where
    S1: Alignable<Symbol = u8> + Sync,
    S2: Alignable<Symbol = u8> + Sync,
{
    let shape = *rec.shape();
    let workers = pool.current_num_threads().max(1);
    let gap = rec.scheme().gap();
    let tally = Tally::default();
    let mut processed = 0;
    let mut clamped = false;

    for row in 1..=shape.seq1() {
        let requested = policy.chunks(row, workers);
        if requested > shape.seq2() && !clamped {
            warn!(
                "Row {row} requests {requested} chunks, but has only {} columns",
                shape.seq2()
            );
            clamped = true;
        }
        let chunks = split(row, shape.seq2(), requested);
        processed += chunks.len();

        let tails = pool.install(|| {
            chunks
                .par_iter()
                .map(|chunk| chunk.tail(rec))
                .collect::<Result<Vec<_>, _>>()
        })?;
        let carries = carries(&chunks, &tails, gap);
        debug!("Row {row}: chunks {chunks:?}, carries {carries:?}");

        pool.install(|| {
            chunks
                .par_iter()
                .zip(carries.par_iter())
                .try_for_each(|(chunk, carry)| {
                    chunk.commit(rec, *carry)?;
                    tally.add(chunk.width());
                    Ok::<_, ConsistencyError>(())
                })
        })?;
    }

    let (cells, active) = tally.collapse();
    Ok(FillStats {
        cells,
        workers,
        active,
        waits: 0,
        chunks: processed,
    })
}
