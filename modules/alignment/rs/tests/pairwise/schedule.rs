use eyre::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::ThreadPoolBuilder;

use parsw_alignment_rs::pairwise::scoring::{Scheme, Score};
use parsw_alignment_rs::pairwise::sw::matrix::{ScoreMatrix, Shape, Trace, TraceMatrix};
use parsw_alignment_rs::pairwise::sw::{schedule, ConsistencyError, Recurrence, Strategy};

use super::{engine, strategies};

const ALPHABET: &[u8] = b"ACGT?";

fn random_sequence(rng: &mut StdRng, max: usize) -> Vec<u8> {
    let len = rng.random_range(1..=max);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

/// Textbook quadratic tables, row by row: scores and the winning direction of every cell.
fn reference(seq1: &[u8], seq2: &[u8], scheme: &Scheme) -> (Vec<Vec<Score>>, Vec<Vec<Trace>>) {
    let gap = scheme.gap();
    let mut table = vec![vec![0; seq2.len() + 1]; seq1.len() + 1];
    let mut directions = vec![vec![Trace::Start; seq2.len() + 1]; seq1.len() + 1];
    for r in 1..=seq1.len() {
        for c in 1..=seq2.len() {
            let diagonal = table[r - 1][c - 1] + scheme.similarity(seq1[r - 1], seq2[c - 1]);
            let candidates = [
                (table[r - 1][c] - gap, Trace::North),
                (diagonal, Trace::NorthWest),
                (table[r][c - 1] - gap, Trace::West),
            ];

            let mut best = candidates[0];
            for candidate in &candidates[1..] {
                if candidate.0 > best.0 {
                    best = *candidate;
                }
            }
            if best.0 < 0 {
                best = (0, Trace::Start);
            }
            (table[r][c], directions[r][c]) = best;
        }
    }
    (table, directions)
}

fn snapshot(scores: &ScoreMatrix, traces: &TraceMatrix) -> Result<(Vec<Score>, Vec<Trace>)> {
    let shape = *scores.shape();
    let (mut values, mut directions) = (Vec::new(), Vec::new());
    for row in 0..*shape.rows() {
        for col in 0..*shape.cols() {
            values.push(scores.get(row, col)?);
            directions.push(traces.get(row, col)?);
        }
    }
    Ok((values, directions))
}

#[test]
fn test_strategies_are_deterministic() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let pool = ThreadPoolBuilder::new().num_threads(4).build()?;
    let scheme = Scheme::default();

    for _ in 0..64 {
        let seq1 = random_sequence(&mut rng, 40);
        let seq2 = random_sequence(&mut rng, 40);
        let (expected, directions) = reference(&seq1, &seq2, &scheme);
        let shape = Shape::new(seq1.len(), seq2.len());

        let mut baseline = None;
        for strategy in strategies() {
            let (scores, traces) = (ScoreMatrix::new(shape), TraceMatrix::new(shape));
            let rec = Recurrence::new(&seq1, &seq2, &scheme, &scores, &traces)?;
            let stats = schedule::fill(&rec, &strategy, &pool)?;

            // Every interior cell is written exactly once
            assert_eq!(*stats.cells(), shape.interior());
            assert_eq!(scores.writes(), shape.interior());

            for (row, values) in expected.iter().enumerate() {
                let values = values.iter().map(|x| Some(*x)).collect::<Vec<_>>();
                assert_eq!(scores.row(row)?, values, "{strategy}: row {row}");
                for (col, direction) in directions[row].iter().enumerate() {
                    assert_eq!(traces.get(row, col)?, *direction, "{strategy}: ({row}, {col})");
                }
            }

            let snapshot = snapshot(&scores, &traces)?;
            match &baseline {
                None => baseline = Some(snapshot),
                Some(baseline) => assert_eq!(baseline, &snapshot, "{strategy}"),
            }
        }
    }
    Ok(())
}

#[test]
fn test_alignments_are_deterministic() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..16 {
        let seq1 = random_sequence(&mut rng, 64);
        let seq2 = random_sequence(&mut rng, 64);

        let expected = engine(Strategy::Sequential, 1)?.align(&seq1, &seq2)?;
        assert!(expected.path().len() <= seq1.len() + seq2.len());
        assert_eq!(expected.path().last(), Some(&expected.best().cell()));
        for strategy in strategies() {
            for threads in [2, 8] {
                let outcome = engine(strategy.clone(), threads)?.align(&seq1, &seq2)?;
                assert_eq!(outcome.best(), expected.best(), "{strategy}");
                assert_eq!(outcome.path(), expected.path(), "{strategy}");
                assert_eq!(outcome.alignment(), expected.alignment(), "{strategy}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_single_worker_wavefront_never_waits() -> Result<()> {
    let pool = ThreadPoolBuilder::new().num_threads(1).build()?;
    let (seq1, seq2) = (b"GATTACAGATTACA", b"GCATGCUGCA");
    let scheme = Scheme::default();
    let shape = Shape::new(seq1.len(), seq2.len());
    let (scores, traces) = (ScoreMatrix::new(shape), TraceMatrix::new(shape));
    let rec = Recurrence::new(&seq1, &seq2, &scheme, &scores, &traces)?;

    let stats = schedule::fill(&rec, &Strategy::Wavefront, &pool)?;
    assert_eq!(*stats.waits(), 0);
    assert_eq!(*stats.workers(), 1);
    assert_eq!(*stats.active(), 1);
    assert_eq!(*stats.cells(), 140);
    Ok(())
}

#[test]
fn test_row_chunk_counts_chunks() -> Result<()> {
    let pool = ThreadPoolBuilder::new().num_threads(4).build()?;
    let (seq1, seq2) = (b"ACGTACG", b"ACGTACGTAC");
    let scheme = Scheme::default();
    let shape = Shape::new(seq1.len(), seq2.len());
    let (scores, traces) = (ScoreMatrix::new(shape), TraceMatrix::new(shape));
    let rec = Recurrence::new(&seq1, &seq2, &scheme, &scores, &traces)?;

    // Rows cycle through 1, 2 and 4 chunks: 1 + 2 + 4 + 1 + 2 + 4 + 1
    let stats = schedule::fill(&rec, &Strategy::default(), &pool)?;
    assert_eq!(*stats.chunks(), 15);
    assert_eq!(*stats.cells(), 70);
    assert_eq!(*stats.waits(), 0);
    Ok(())
}

#[test]
fn test_second_write_is_detected() -> Result<()> {
    let pool = ThreadPoolBuilder::new().num_threads(4).build()?;
    let (seq1, seq2) = (b"ACGTACGT", b"TGCATGCA");
    let scheme = Scheme::default();
    let shape = Shape::new(seq1.len(), seq2.len());

    for strategy in strategies() {
        let (scores, traces) = (ScoreMatrix::new(shape), TraceMatrix::new(shape));
        scores.set(2, 3, 0)?;

        let rec = Recurrence::new(&seq1, &seq2, &scheme, &scores, &traces)?;
        let err = schedule::fill(&rec, &strategy, &pool).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConsistencyError>(),
            Some(&ConsistencyError::Rewritten { row: 2, col: 3 }),
            "{strategy}: {err:?}"
        );
    }
    Ok(())
}
