use eyre::Result;

use parsw_alignment_rs::pairwise::scoring::Scheme;
use parsw_alignment_rs::pairwise::sw::{Config, Engine, Strategy};

use super::{engine, strategies};

struct Workload<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    score: i32,
    end: (usize, usize),
    path: &'a [(usize, usize)],
    rle: &'a str,
}

fn ensure(w: Workload<'_>) -> Result<()> {
    for strategy in strategies() {
        for threads in [1, 4] {
            let engine = engine(strategy.clone(), threads)?;
            let outcome = engine.align(&w.seq1, &w.seq2)?;

            assert_eq!(*outcome.best().score(), w.score, "{strategy}");
            assert_eq!(outcome.best().cell(), w.end, "{strategy}");
            assert_eq!(outcome.path().cells(), w.path, "{strategy}");
            assert_eq!(outcome.alignment().rle(), w.rle, "{strategy}");
            assert_eq!(
                *outcome.stats().cells(),
                w.seq1.len() * w.seq2.len(),
                "{strategy}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_gattaca() -> Result<()> {
    ensure(Workload {
        seq1: b"GATTACA",
        seq2: b"GCATGCU",
        score: 2,
        end: (7, 3),
        path: &[(5, 1), (6, 2), (7, 3)],
        rle: "2=",
    })
}

#[test]
fn test_identical() -> Result<()> {
    ensure(Workload {
        seq1: b"ACGT",
        seq2: b"ACGT",
        score: 4,
        end: (4, 4),
        path: &[(1, 1), (2, 2), (3, 3), (4, 4)],
        rle: "4=",
    })
}

#[test]
fn test_no_similarity() -> Result<()> {
    ensure(Workload {
        seq1: b"AAAA",
        seq2: b"CCCC",
        score: 0,
        end: (4, 4),
        path: &[(4, 4)],
        rle: "",
    })
}

#[test]
fn test_wildcard() -> Result<()> {
    ensure(Workload {
        seq1: b"ACGT",
        seq2: b"A?GT",
        score: 4,
        end: (4, 4),
        path: &[(1, 1), (2, 2), (3, 3), (4, 4)],
        rle: "1=1~2=",
    })?;
    ensure(Workload {
        seq1: b"?",
        seq2: b"?",
        score: 1,
        end: (1, 1),
        path: &[(1, 1)],
        rle: "1~",
    })
}

#[test]
fn test_restart_inside_path() -> Result<()> {
    ensure(Workload {
        seq1: b"TTA",
        seq2: b"ATA",
        score: 2,
        end: (3, 3),
        path: &[(1, 1), (2, 2), (3, 3)],
        rle: "2=",
    })
}

#[test]
fn test_single_column() -> Result<()> {
    ensure(Workload {
        seq1: b"AGAAAAAAAGG",
        seq2: b"G",
        score: 1,
        end: (11, 1),
        path: &[(10, 0), (11, 1)],
        rle: "1=",
    })
}

#[test]
fn test_gap() -> Result<()> {
    ensure(Workload {
        seq1: b"ACGTTGCA",
        seq2: b"ACGTGCA",
        score: 5,
        end: (8, 7),
        path: &[
            (1, 1),
            (2, 2),
            (3, 3),
            (4, 4),
            (5, 4),
            (6, 5),
            (7, 6),
            (8, 7),
        ],
        rle: "4=1^3=",
    })
}

#[test]
fn test_gattaca_matrix() -> Result<()> {
    let expected: [[i32; 8]; 8] = [
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 0, 0, 0, 1, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 0],
        [0, 0, 0, 0, 2, 0, 0, 0],
        [0, 0, 0, 0, 1, 1, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 0],
        [0, 0, 1, 0, 0, 0, 1, 0],
        [0, 0, 0, 2, 0, 0, 0, 0],
    ];

    for strategy in strategies() {
        let filled = engine(strategy, 4)?.fill(&b"GATTACA", &b"GCATGCU")?;
        for (row, values) in expected.iter().enumerate() {
            let values = values.iter().map(|x| Some(*x)).collect::<Vec<_>>();
            assert_eq!(filled.scores().row(row)?, values);
        }
        assert_eq!(filled.scores().writes(), 49);
    }
    Ok(())
}

#[test]
fn test_custom_scheme() -> Result<()> {
    // Cheap gaps make the gapped alignment the best one
    let config = Config::new(Scheme::new(1, 2, None), Strategy::Wavefront, 4);
    let outcome = Engine::new(config)?.align(&b"ACGTTGCA", &b"ACGTGCA")?;
    assert_eq!(*outcome.best().score(), 13);
    assert_eq!(outcome.alignment().rle(), "4=1^3=");
    Ok(())
}
