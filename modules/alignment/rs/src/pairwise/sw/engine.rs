use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{ensure, Result};
use log::info;
use rayon::ThreadPool;

use parsw_core_rs::{parallelism, Alignable};

use super::best::{self, Best};
use super::matrix::{ScoreMatrix, Shape, TraceMatrix};
use super::recurrence::Recurrence;
use super::schedule::{self, ChunkPolicy, FillStats, Strategy};
use super::traceback::{self, Path};
use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::Scheme;

#[derive(Clone, PartialEq, Eq, Debug, Constructor, Getters, Dissolve)]
pub struct Config {
    scoring: Scheme,
    strategy: Strategy,
    /// Signed thread request, see [`parallelism::threads`].
    threads: isize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: Scheme::default(),
            strategy: Strategy::default(),
            threads: -1,
        }
    }
}

impl Config {
    fn validate(&self) -> Result<()> {
        ensure!(
            *self.scoring.gap_penalty() >= 0,
            "Gap penalty must be non-negative, got {}",
            self.scoring.gap_penalty()
        );
        ensure!(
            *self.scoring.match_bonus() >= 0,
            "Match bonus must be non-negative, got {}",
            self.scoring.match_bonus()
        );
        match &self.strategy {
            Strategy::RowChunk(ChunkPolicy::Cycle(pattern)) => {
                ensure!(
                    !pattern.is_empty() && pattern.iter().all(|x| *x > 0),
                    "Chunk pattern must be a non-empty list of positive counts, got {:?}",
                    pattern
                )
            }
            Strategy::RowChunk(ChunkPolicy::Fixed(chunks)) => {
                ensure!(*chunks > 0, "Chunk count must be positive")
            }
            _ => {}
        }
        Ok(())
    }
}

/// Local alignment engine. Owns the worker pool shared by all alignments it runs.
pub struct Engine {
    config: Config,
    pool: ThreadPool,
}

impl Engine {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let pool = parallelism::pool(config.threads)?;
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Fills the score and trace matrices for a pair of sequences.
    pub fn fill<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Result<Filled>
    where
        S1: Alignable<Symbol = u8> + Sync,
        S2: Alignable<Symbol = u8> + Sync,
    {
        ensure!(
            !seq1.is_empty() && !seq2.is_empty(),
            "Both sequences must be non-empty, got {} and {} symbols",
            seq1.len(),
            seq2.len()
        );

        let shape = Shape::new(seq1.len(), seq2.len());
        info!(
            "Filling {}x{} matrices: {} strategy, {} threads",
            shape.rows(),
            shape.cols(),
            self.config.strategy,
            self.threads()
        );

        let (scores, traces) = (ScoreMatrix::new(shape), TraceMatrix::new(shape));
        let stats = {
            let rec = Recurrence::new(seq1, seq2, &self.config.scoring, &scores, &traces)?;
            schedule::fill(&rec, &self.config.strategy, &self.pool)?
        };
        info!(
            "Computed {} cells with {} active workers",
            stats.cells(),
            stats.active()
        );

        Ok(Filled {
            scores,
            traces,
            stats,
        })
    }

    /// Fills the matrices, then locates the best local alignment and reconstructs it.
    pub fn align<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Result<Outcome>
    where
        S1: Alignable<Symbol = u8> + Sync,
        S2: Alignable<Symbol = u8> + Sync,
    {
        let filled = self.fill(seq1, seq2)?;
        let best = filled.best()?;
        let path = filled.traceback(&best)?;
        let alignment = filled.summarize(&best, &path, seq1, seq2, &self.config.scoring)?;
        Ok(Outcome {
            best,
            path,
            alignment,
            stats: filled.stats,
        })
    }
}

/// Completely filled matrices of a single alignment.
#[derive(Getters, Dissolve)]
pub struct Filled {
    scores: ScoreMatrix,
    traces: TraceMatrix,
    stats: FillStats,
}

impl Filled {
    pub fn best(&self) -> Result<Best> {
        Ok(best::find(&self.scores)?)
    }

    pub fn traceback(&self, best: &Best) -> Result<Path> {
        Ok(traceback::trace(&self.traces, best.cell())?)
    }

    pub fn summarize<S1, S2>(
        &self,
        best: &Best,
        path: &Path,
        seq1: &S1,
        seq2: &S2,
        scheme: &Scheme,
    ) -> Result<Alignment>
    where
        S1: Alignable<Symbol = u8>,
        S2: Alignable<Symbol = u8>,
    {
        Ok(Alignment::from_path(
            *best.score(),
            path,
            &self.traces,
            seq1,
            seq2,
            scheme,
        )?)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Getters, Dissolve)]
pub struct Outcome {
    best: Best,
    path: Path,
    alignment: Alignment,
    stats: FillStats,
}
