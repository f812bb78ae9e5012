use eyre::Result;

use parsw_alignment_rs::pairwise::scoring::Scheme;
use parsw_alignment_rs::pairwise::sw::{ChunkPolicy, Config, Engine, Strategy};

mod local;
mod schedule;

/// Every fill strategy, with several chunk layouts for the row-chunk one.
pub fn strategies() -> Vec<Strategy> {
    vec![
        Strategy::Sequential,
        Strategy::Wavefront,
        Strategy::RowChunk(ChunkPolicy::default()),
        Strategy::RowChunk(ChunkPolicy::Fixed(3)),
        Strategy::RowChunk(ChunkPolicy::Cycle(vec![5, 1, 2])),
        Strategy::RowChunk(ChunkPolicy::Parallelism),
    ]
}

pub fn engine(strategy: Strategy, threads: isize) -> Result<Engine> {
    Engine::new(Config::new(Scheme::default(), strategy, threads))
}
