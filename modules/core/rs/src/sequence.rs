use std::fmt::{Debug, Display, Formatter};

use derive_getters::{Dissolve, Getters};

use crate::Alignable;

/// An immutable, named sequence of byte symbols (one symbol per byte).
#[derive(Clone, PartialEq, Eq, Hash, Getters, Dissolve)]
pub struct SequenceBuffer {
    /// Human-readable name, usually the path the symbols were loaded from.
    name: String,
    /// Symbols in storage order (0-based).
    symbols: Vec<u8>,
}

impl SequenceBuffer {
    pub fn new(name: impl Into<String>, symbols: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            symbols: symbols.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }
}

impl Alignable for SequenceBuffer {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.symbols[pos]
    }
}

impl Debug for SequenceBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceBuffer")
            .field("name", &self.name)
            .field("symbols", &String::from_utf8_lossy(&self.symbols))
            .finish()
    }
}

impl Display for SequenceBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} size: {}", self.name, self.symbols.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_buffer() {
        let seq = SequenceBuffer::new("query.txt", b"GATTACA".as_slice());
        assert_eq!(seq.name(), "query.txt");
        assert_eq!(seq.len(), 7);
        assert_eq!(*seq.at(0), b'G');
        assert_eq!(seq.as_bytes(), b"GATTACA");
        assert_eq!(seq.to_string(), "query.txt size: 7");

        let (name, symbols) = seq.dissolve();
        assert_eq!(name, "query.txt");
        assert_eq!(symbols, b"GATTACA".to_vec());
    }
}
