pub use rowchunk::{split, Chunk};

mod rowchunk;
mod sequential;
mod wavefront;

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use derive_getters::{Dissolve, Getters};
use derive_more::Display;
use eyre::{eyre, Report, Result};
use log::{debug, error};
use rayon::ThreadPool;
use thread_local::ThreadLocal;

use parsw_core_rs::Alignable;

use super::recurrence::Recurrence;

/// How many chunks a row is split into by the row-chunk strategy.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum ChunkPolicy {
    /// Row `r` uses `pattern[(r - 1) % pattern.len()]` chunks.
    Cycle(Vec<usize>),
    /// Every row uses the same number of chunks.
    Fixed(usize),
    /// One chunk per pool thread.
    Parallelism,
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        ChunkPolicy::Cycle(vec![1, 2, 4])
    }
}

impl ChunkPolicy {
    /// Requested number of chunks for a 1-based row. Always at least one.
    pub fn chunks(&self, row: usize, workers: usize) -> usize {
        let requested = match self {
            ChunkPolicy::Cycle(pattern) if pattern.is_empty() => 1,
            ChunkPolicy::Cycle(pattern) => pattern[(row.max(1) - 1) % pattern.len()],
            ChunkPolicy::Fixed(chunks) => *chunks,
            ChunkPolicy::Parallelism => workers,
        };
        requested.max(1)
    }
}

/// Order in which the interior of the matrices is filled.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Display)]
pub enum Strategy {
    /// Row-major, on the calling thread.
    #[display("sequential")]
    Sequential,
    /// Workers pull ready cells from a shared FIFO frontier.
    #[display("wavefront")]
    Wavefront,
    /// Rows one after another, each row split into column chunks filled in parallel.
    #[display("row-chunk")]
    RowChunk(ChunkPolicy),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::RowChunk(ChunkPolicy::default())
    }
}

/// Bookkeeping of a single fill.
#[derive(Clone, Eq, PartialEq, Debug, Default, Getters, Dissolve)]
pub struct FillStats {
    /// Interior cells written.
    cells: usize,
    /// Workers the fill was allowed to use.
    workers: usize,
    /// Workers that committed at least one cell.
    active: usize,
    /// Times a wavefront worker had to wait for its north neighbour.
    waits: usize,
    /// Chunks processed by the row-chunk strategy.
    chunks: usize,
}

/// Fills every interior cell exactly once using the given strategy.
///
/// Parallel strategies run on `pool`. On return all interior cells are computed, otherwise the
/// first consistency violation is reported.
pub fn fill<S1, S2>(
    rec: &Recurrence<S1, S2>,
    strategy: &Strategy,
    pool: &ThreadPool,
) -> Result<FillStats>
where
    S1: Alignable<Symbol = u8> + Sync,
    S2: Alignable<Symbol = u8> + Sync,
{
    let stats = match strategy {
        Strategy::Sequential => sequential::fill(rec)?,
        Strategy::Wavefront => wavefront::fill(rec, pool)?,
        Strategy::RowChunk(policy) => rowchunk::fill(rec, policy, pool)?,
    };
    rec.scores().ensure_complete()?;
    debug!("{} fill finished: {:?}", strategy, stats);
    Ok(stats)
}

/// Per-worker counters of committed cells.
#[derive(Default)]
struct Tally {
    counts: ThreadLocal<RefCell<usize>>,
}

impl Tally {
    fn add(&self, cells: usize) {
        *self.counts.get_or_default().borrow_mut() += cells;
    }

    /// Total number of cells and the number of workers that contributed to it.
    fn collapse(self) -> (usize, usize) {
        self.counts
            .into_iter()
            .map(RefCell::into_inner)
            .filter(|x| *x > 0)
            .fold((0, 0), |(total, active), x| (total + x, active + 1))
    }
}

/// Errors raised inside worker threads.
#[derive(Default)]
struct Failures {
    occurred: AtomicBool,
    errors: Mutex<Vec<Report>>,
}

impl Failures {
    fn occurred(&self) -> bool {
        self.occurred.load(Ordering::Relaxed)
    }

    fn push(&self, err: impl Into<Report>) {
        self.occurred.store(true, Ordering::Relaxed);
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(err.into());
        }
    }

    fn into_result(self) -> Result<()> {
        let errors = self
            .errors
            .into_inner()
            .map_err(|_| eyre!("A worker panicked while recording an error"))?;
        let mut errors = errors.into_iter();
        let Some(first) = errors.next() else {
            return Ok(());
        };
        for err in errors {
            error!("Secondary fill failure: {err:?}");
        }
        Err(first)
    }
}
