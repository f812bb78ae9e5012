pub use alignable::Alignable;
pub use sequence::SequenceBuffer;

mod alignable;
pub mod parallelism;
mod sequence;
