use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

/// Score of a single matrix cell.
pub type Score = i32;

/// Penalty subtracted for every gap position.
pub const GAP_PENALTY: Score = 2;
/// Bonus added for a matching pair and subtracted for a mismatching one.
pub const MATCH_BONUS: Score = 1;
/// Symbol that matches anything.
pub const WILDCARD: u8 = b'?';

/// Outcome of comparing two symbols.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Match,
    Mismatch,
    /// At least one side is the wildcard.
    Equivalent,
}

/// Linear-gap scoring with a symmetric match bonus and an optional wildcard symbol.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve, Constructor)]
pub struct Scheme {
    gap_penalty: Score,
    match_bonus: Score,
    wildcard: Option<u8>,
}

impl Default for Scheme {
    fn default() -> Self {
        Self::new(GAP_PENALTY, MATCH_BONUS, Some(WILDCARD))
    }
}

impl Scheme {
    #[inline(always)]
    pub fn classify(&self, s1: u8, s2: u8) -> Type {
        if self.wildcard.is_some_and(|w| s1 == w || s2 == w) {
            Type::Equivalent
        } else if s1 == s2 {
            Type::Match
        } else {
            Type::Mismatch
        }
    }

    /// Similarity of two symbols: `+match_bonus` for matching or equivalent pairs,
    /// `-match_bonus` otherwise.
    #[inline(always)]
    pub fn similarity(&self, s1: u8, s2: u8) -> Score {
        match self.classify(s1, s2) {
            Type::Match | Type::Equivalent => self.match_bonus,
            Type::Mismatch => -self.match_bonus,
        }
    }

    #[inline(always)]
    pub fn gap(&self) -> Score {
        self.gap_penalty
    }
}
