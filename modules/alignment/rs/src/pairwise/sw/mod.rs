pub use best::Best;
pub use engine::{Config, Engine, Filled, Outcome};
pub use error::ConsistencyError;
pub use recurrence::{Cell, Recurrence};
pub use schedule::{ChunkPolicy, FillStats, Strategy};
pub use traceback::Path;

pub mod best;
mod engine;
mod error;
pub mod matrix;
pub mod recurrence;
pub mod schedule;
pub mod traceback;
