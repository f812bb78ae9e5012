use std::time::Instant;

use clap::Parser;
use eyre::Result;
use log::info;

use parsw_alignment_rs::pairwise::sw::Engine;
use parsw_io_rs::sequence;

use args::Cli;
use report::Report;

mod args;
mod logger;
mod report;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    let engine = Engine::new(cli.config())?;

    // Timing covers loading, the fill and the max-score search
    let started = Instant::now();
    let seq = sequence::load(&cli.sequence)?;
    let unk = sequence::load(&cli.unknown)?;
    info!("Loaded {seq} and {unk}");

    let filled = engine.fill(&seq, &unk)?;
    let best = filled.best()?;
    let elapsed = started.elapsed();

    let path = filled.traceback(&best)?;
    let alignment = filled.summarize(&best, &path, &seq, &unk, engine.config().scoring())?;

    let report = Report::new(
        &seq,
        &unk,
        &best,
        engine.config().strategy().to_string(),
        engine.threads(),
        elapsed,
        &path,
        alignment.rle(),
    );
    print!("{report}");
    Ok(())
}
