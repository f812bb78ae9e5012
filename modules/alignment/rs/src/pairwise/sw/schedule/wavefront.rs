use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard};

use eyre::{eyre, Result};
use log::trace;
use rayon::ThreadPool;

use parsw_core_rs::Alignable;

use super::{Failures, FillStats, Tally};
use crate::pairwise::sw::matrix::Shape;
use crate::pairwise::sw::recurrence::Recurrence;

/// Shared state of the wavefront fill, guarded by a single mutex.
struct Frontier {
    /// Cells whose west and northwest neighbours are known, in the order they became ready.
    queue: VecDeque<(usize, usize)>,
    /// Last committed column of each row. Row 0 is the boundary and counts as complete.
    progress: Vec<usize>,
    /// Interior cells that are not committed yet.
    pending: usize,
    waits: usize,
    failed: bool,
}

impl Frontier {
    fn new(shape: &Shape) -> Self {
        let mut progress = vec![0; *shape.rows()];
        progress[0] = shape.seq2();

        let mut queue = VecDeque::with_capacity(shape.seq1().min(shape.seq2()) + 1);
        queue.push_back((1, 1));

        Self {
            queue,
            progress,
            pending: shape.interior(),
            waits: 0,
            failed: false,
        }
    }

    fn finished(&self) -> bool {
        self.failed || self.pending == 0
    }

    /// Records a committed cell and enqueues the cells it unlocks.
    ///
    /// A cell is enqueued by its west neighbour, cells of column 1 by their north neighbour.
    /// Every interior cell is therefore enqueued exactly once.
    fn complete(&mut self, shape: &Shape, row: usize, col: usize) {
        self.progress[row] = col;
        self.pending -= 1;

        if col < shape.seq2() {
            self.queue.push_back((row, col + 1));
        }
        if col == 1 && row < shape.seq1() {
            self.queue.push_back((row + 1, 1));
        }
    }
}

struct Wavefront<'a, 'b, S1, S2> {
    rec: &'a Recurrence<'b, S1, S2>,
    frontier: Mutex<Frontier>,
    ready: Condvar,
    tally: Tally,
    failures: Failures,
}

impl<S1, S2> Wavefront<'_, '_, S1, S2>
where
    S1: Alignable<Symbol = u8> + Sync,
    S2: Alignable<Symbol = u8> + Sync,
{
    fn lock(&self) -> Result<MutexGuard<'_, Frontier>> {
        self.frontier
            .lock()
            .map_err(|_| eyre!("Wavefront frontier is poisoned"))
    }

    fn wait<'g>(&self, guard: MutexGuard<'g, Frontier>) -> Result<MutexGuard<'g, Frontier>> {
        self.ready
            .wait(guard)
            .map_err(|_| eyre!("Wavefront frontier is poisoned"))
    }

    /// Pops the next ready cell and blocks until its north neighbour is committed.
    /// Returns `None` once the fill is finished or has failed.
    fn next(&self) -> Result<Option<(usize, usize)>> {
        let mut frontier = self.lock()?;
        let (row, col) = loop {
            if frontier.finished() || self.failures.occurred() {
                return Ok(None);
            }
            match frontier.queue.pop_front() {
                Some(cell) => break cell,
                None => frontier = self.wait(frontier)?,
            }
        };

        // FIFO order guarantees that the north neighbour was handed out before this cell
        while frontier.progress[row - 1] < col && !frontier.failed {
            frontier.waits += 1;
            frontier = self.wait(frontier)?;
        }
        Ok((!frontier.failed).then_some((row, col)))
    }

    fn work(&self) -> Result<()> {
        let shape = *self.rec.shape();
        while let Some((row, col)) = self.next()? {
            self.rec.commit(row, col)?;
            self.tally.add(1);

            let mut frontier = self.lock()?;
            frontier.complete(&shape, row, col);
            drop(frontier);
            self.ready.notify_all();
        }
        Ok(())
    }

    fn abort(&self) {
        if let Ok(mut frontier) = self.frontier.lock() {
            frontier.failed = true;
        }
        self.ready.notify_all();
    }
}

/// Parallel fill driven by a shared FIFO queue of ready cells.
///
/// Every pool thread runs a worker. A worker pops a cell whose west and northwest neighbours are
/// committed, waits for the north neighbour, commits the cell and enqueues the successors.
pub fn fill<S1, S2>(rec: &Recurrence<S1, S2>, pool: &ThreadPool) -> Result<FillStats>
where
    S1: Alignable<Symbol = u8> + Sync,
    S2: Alignable<Symbol = u8> + Sync,
{
    let shape = *rec.shape();
    let workers = pool.current_num_threads().max(1);
    let wavefront = Wavefront {
        rec,
        frontier: Mutex::new(Frontier::new(&shape)),
        ready: Condvar::new(),
        tally: Tally::default(),
        failures: Failures::default(),
    };

    pool.scope(|s| {
        for _ in 0..workers {
            s.spawn(|_| {
                if let Err(err) = wavefront.work() {
                    wavefront.failures.push(err);
                    wavefront.abort();
                }
            });
        }
    });

    let Wavefront {
        frontier,
        tally,
        failures,
        ..
    } = wavefront;
    failures.into_result()?;

    let frontier = frontier
        .into_inner()
        .map_err(|_| eyre!("Wavefront frontier is poisoned"))?;
    if !frontier.queue.is_empty() || frontier.pending != 0 {
        return Err(eyre!(
            "Wavefront stopped with {} queued and {} pending cells",
            frontier.queue.len(),
            frontier.pending
        ));
    }
    trace!("Wavefront waited on north neighbours {} times", frontier.waits);

    let (cells, active) = tally.collapse();
    Ok(FillStats {
        cells,
        workers,
        active,
        waits: frontier.waits,
        chunks: 0,
    })
}
