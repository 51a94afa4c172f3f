mod action;
mod queue;

pub use action::*;
pub use queue::*;
