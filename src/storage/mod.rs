//! Snapshot durability for a game table.
//!
//! Storage is touched only at process boundaries: the server loads once at
//! startup and saves once at shutdown. Nothing here participates in the
//! critical section.
mod disk;
mod memory;

pub use disk::*;
pub use memory::*;

use crate::game::Table;

/// Somewhere a table can be parked between processes.
pub trait Storage {
    /// Previously saved table, or None if nothing was saved yet.
    fn load(&self) -> anyhow::Result<Option<Table>>;
    /// Replace whatever was saved with this table.
    fn save(&self, table: &Table) -> anyhow::Result<()>;
}
