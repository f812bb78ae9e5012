use eyre::Result;

use parsw_core_rs::Alignable;

use super::FillStats;
use crate::pairwise::sw::recurrence::Recurrence;

/// Row-major fill on the calling thread.
pub fn fill<S1, S2>(rec: &Recurrence<S1, S2>) -> Result<FillStats>
where
    S1: Alignable<Symbol = u8>,
    S2: Alignable<Symbol = u8>,
{
    let shape = *rec.shape();
    for row in 1..=shape.seq1() {
        for col in 1..=shape.seq2() {
            rec.commit(row, col)?;
        }
    }

    Ok(FillStats {
        cells: shape.interior(),
        workers: 1,
        active: 1,
        ..Default::default()
    })
}
