pub use reader::Reader;

mod reader;

use std::path::Path;

use eyre::Result;
use parsw_core_rs::SequenceBuffer;

/// Load a raw symbol file into a [`SequenceBuffer`] named after the path.
pub fn load(path: impl AsRef<Path>) -> Result<SequenceBuffer> {
    Reader::from_path(path.as_ref())?.read(path.as_ref().display().to_string())
}
