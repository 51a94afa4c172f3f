use super::*;
use std::sync::Mutex;

/// Process-local storage, for running without a disk.
#[derive(Debug, Default)]
pub struct Memory {
    slot: Mutex<Option<Table>>,
}

impl Storage for Memory {
    fn load(&self) -> anyhow::Result<Option<Table>> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|_| anyhow::anyhow!("memory storage poisoned"))
    }
    fn save(&self, table: &Table) -> anyhow::Result<()> {
        self.slot
            .lock()
            .map(|mut slot| *slot = Some(table.clone()))
            .map_err(|_| anyhow::anyhow!("memory storage poisoned"))
    }
}
