mod engine;
mod phase;
mod settlement;

pub use engine::*;
pub use phase::*;
pub use settlement::*;
