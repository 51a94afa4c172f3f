mod ledger;
mod standing;

pub use ledger::*;
pub use standing::*;
