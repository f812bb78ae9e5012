use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use derive_getters::Dissolve;
use eyre::{ensure, Result, WrapErr};

use parsw_core_rs::SequenceBuffer;

/// Reader for flat symbol files: one symbol per byte, no header, optionally terminated by a
/// single line break.
///
/// Ignores:
/// - One trailing `\n` or `\r\n` (the terminator left by text editors)
///
/// Returns an error if there are:
/// - Errors while reading from the underlying reader
/// - No symbols left after the terminator is stripped
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Dissolve)]
pub struct Reader<R> {
    reader: R,
}

impl Reader<()> {
    /// Open the symbol file at the given path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Reader<BufReader<File>>> {
        let path = path.as_ref();
        let file = File::open(path)
            .wrap_err_with(|| format!("Failed to open sequence file {}", path.display()))?;
        Ok(Reader::new(BufReader::new(file)))
    }
}

impl<R: Read> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Consume the reader and return all meaningful symbols as a named buffer.
    pub fn read(mut self, name: impl Into<String>) -> Result<SequenceBuffer> {
        let name = name.into();

        let mut symbols = Vec::new();
        self.reader
            .read_to_end(&mut symbols)
            .wrap_err_with(|| format!("Failed to read sequence {name}"))?;

        strip_terminator(&mut symbols);
        ensure!(!symbols.is_empty(), "Sequence {name} is empty");

        if let Some(pos) = memchr::memchr2(b'\n', b'\r', &symbols) {
            log::warn!(
                "Sequence {name} contains a line break at byte {pos}; it will be aligned as a symbol"
            );
        }
        symbols.shrink_to_fit();

        Ok(SequenceBuffer::new(name, symbols))
    }
}

fn strip_terminator(symbols: &mut Vec<u8>) {
    if symbols.last() == Some(&b'\n') {
        symbols.pop();
        if symbols.last() == Some(&b'\r') {
            symbols.pop();
        }
    }
}
