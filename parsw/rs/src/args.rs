use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use parsw_alignment_rs::pairwise::scoring::{Scheme, Score, GAP_PENALTY, MATCH_BONUS, WILDCARD};
use parsw_alignment_rs::pairwise::sw::{ChunkPolicy, Config, Strategy};

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum Fill {
    /// Row-major on a single thread
    Sequential,
    /// Ready-cell queue shared by all workers
    Wavefront,
    /// Rows one by one, each split into parallel column chunks
    RowChunk,
}

#[derive(Parser, Debug)]
#[command(name = "parsw")]
#[command(version)]
#[command(about = "Parallel Smith-Waterman local alignment of two sequences", long_about = None)]
pub struct Cli {
    /// File with the first sequence (matrix rows)
    pub sequence: PathBuf,
    /// File with the second sequence (matrix columns)
    pub unknown: PathBuf,
    #[arg(long, value_enum, default_value_t = Fill::RowChunk)]
    pub strategy: Fill,
    /// Worker threads: positive = exact count, 0 = one, negative = all but |n| - 1
    #[arg(short = 't', long, default_value_t = -1, allow_negative_numbers = true)]
    pub threads: isize,
    /// Chunk counts cycled over the rows by the row-chunk strategy, or `auto` for one chunk
    /// per worker thread
    #[arg(long, default_value = "1,2,4", value_parser = parse_chunks)]
    pub chunks: ChunkPolicy,
    #[arg(long, default_value_t = GAP_PENALTY)]
    pub gap_penalty: Score,
    #[arg(long, default_value_t = MATCH_BONUS)]
    pub match_bonus: Score,
    /// Treat '?' as a regular symbol instead of a wildcard
    #[arg(long, default_value_t = false)]
    pub no_wildcard: bool,
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> Config {
        let strategy = match self.strategy {
            Fill::Sequential => Strategy::Sequential,
            Fill::Wavefront => Strategy::Wavefront,
            Fill::RowChunk => Strategy::RowChunk(self.chunks.clone()),
        };
        let wildcard = (!self.no_wildcard).then_some(WILDCARD);
        Config::new(
            Scheme::new(self.gap_penalty, self.match_bonus, wildcard),
            strategy,
            self.threads,
        )
    }
}

fn parse_chunks(value: &str) -> Result<ChunkPolicy, String> {
    if value.eq_ignore_ascii_case("auto") {
        return Ok(ChunkPolicy::Parallelism);
    }
    let pattern = value
        .split(',')
        .map(|x| match x.trim().parse::<usize>() {
            Ok(0) => Err("chunk counts must be positive".to_string()),
            Ok(chunks) => Ok(chunks),
            Err(err) => Err(format!("invalid chunk count '{}': {}", x, err)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ChunkPolicy::Cycle(pattern))
}
