mod countdown;
mod outcome;
mod record;
mod roster;
mod rules;
mod state;
mod table;

pub use countdown::*;
pub use outcome::*;
pub use record::*;
pub use roster::*;
pub use rules::*;
pub use state::*;
pub use table::*;
