pub use alignment::{Alignment, Op, Step};

pub mod alignment;
pub mod scoring;
pub mod sw;
