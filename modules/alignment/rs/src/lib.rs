pub use parsw_core_rs::{Alignable, SequenceBuffer};

pub mod pairwise;
