use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::{Result, WrapErr};
use rayon::{ThreadPool, ThreadPoolBuilder};

// Signed thread request:
//  n > 0 => exactly n threads, but never more than the machine offers
//  n = 0 => a single thread
//  n < 0 => all threads except |n| - 1 of them, at least one
fn _resolve(requested: isize, max: usize) -> usize {
    let max = max.max(1) as isize;
    match requested.cmp(&0) {
        Ordering::Less => (max + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(max) as usize,
    }
}

/// Number of worker threads for a signed request, bounded by the available parallelism.
pub fn threads(requested: isize) -> Result<usize> {
    let max = available_parallelism()
        .wrap_err("Failed to query the available parallelism")?
        .get();
    Ok(_resolve(requested, max))
}

/// Build a dedicated rayon pool sized by [`threads`].
pub fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = threads(requested)?;
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("parsw-worker-{index}"))
        .build()
        .wrap_err_with(|| format!("Failed to build a thread pool with {threads} threads"))?;
    Ok(pool)
}
