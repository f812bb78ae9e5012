use std::fmt::{Display, Formatter};
use std::time::Duration;

use derive_more::Constructor;

use parsw_alignment_rs::pairwise::sw::{Best, Path};
use parsw_alignment_rs::{Alignable, SequenceBuffer};

/// Plain-text summary of a single alignment run.
#[derive(Constructor)]
pub struct Report<'a> {
    sequence: &'a SequenceBuffer,
    unknown: &'a SequenceBuffer,
    best: &'a Best,
    strategy: String,
    threads: usize,
    elapsed: Duration,
    path: &'a Path,
    rle: String,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SEQUENCE(S): {}", self.sequence)?;
        writeln!(f, "UNKNOWN(T): {}", self.unknown)?;
        writeln!(f, "{}", self.best)?;
        writeln!(
            f,
            "similarity matrix dims: ({}x{})",
            self.sequence.len() + 1,
            self.unknown.len() + 1
        )?;
        writeln!(f, "strategy: {}, threads: {}", self.strategy, self.threads)?;
        writeln!(f, "elapsed time: {:.6} seconds.", self.elapsed.as_secs_f64())?;
        writeln!(f, "traceback:")?;
        writeln!(f, "{}", self.path)?;
        if self.rle.is_empty() {
            writeln!(f, "alignment: none")
        } else {
            writeln!(f, "alignment: {}", self.rle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let sequence = SequenceBuffer::new("s.txt".to_string(), b"GATTACA".to_vec());
        let unknown = SequenceBuffer::new("t.txt".to_string(), b"GCATGCU".to_vec());
        let best = Best::new(2, 7, 3);
        let path = Path::from(vec![(5, 1), (6, 2), (7, 3)]);
        let report = Report::new(
            &sequence,
            &unknown,
            &best,
            "row-chunk".to_string(),
            4,
            Duration::from_millis(1500),
            &path,
            "2=".to_string(),
        );

        assert_eq!(
            report.to_string(),
            "SEQUENCE(S): s.txt size: 7\n\
             UNKNOWN(T): t.txt size: 7\n\
             (2, [7, 3])\n\
             similarity matrix dims: (8x8)\n\
             strategy: row-chunk, threads: 4\n\
             elapsed time: 1.500000 seconds.\n\
             traceback:\n\
             [5, 1] [6, 2] [7, 3]\n\
             alignment: 2=\n"
        );
    }
}
