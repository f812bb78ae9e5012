use crate::pairwise::scoring::Type;
use crate::pairwise::sw::matrix::Trace;

/// A single operation of a local alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Gap in the first sequence, a symbol of the second one is skipped (v)
    GapFirst,
    /// Gap in the second sequence, a symbol of the first one is skipped (^)
    GapSecond,
    /// Symbols are paired through the wildcard (~)
    Equivalent,
    /// Identical symbols (=)
    Match,
    /// Different symbols (X)
    Mismatch,
}

impl Op {
    /// Operation that produced a matrix cell. Restarts produce nothing.
    pub fn from_trace(trace: Trace, pair: impl FnOnce() -> Type) -> Option<Self> {
        match trace {
            Trace::Start => None,
            Trace::North => Some(Op::GapSecond),
            Trace::West => Some(Op::GapFirst),
            Trace::NorthWest => Some(match pair() {
                Type::Match => Op::Match,
                Type::Mismatch => Op::Mismatch,
                Type::Equivalent => Op::Equivalent,
            }),
        }
    }

    /// Number of symbols of the first and the second sequence consumed by `len` operations.
    pub fn consumes(&self, len: usize) -> (usize, usize) {
        match self {
            Op::GapFirst => (0, len),
            Op::GapSecond => (len, 0),
            Op::Equivalent | Op::Match | Op::Mismatch => (len, len),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Equivalent => '~',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }
}
