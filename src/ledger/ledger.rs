use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-player reputation and cumulative profit.
/// Entries are created lazily on first proposal and live until reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerLedger {
    entries: BTreeMap<PlayerIndex, Standing>,
}

impl PlayerLedger {
    /// Standing of a player, creating a neutral entry if absent.
    pub fn snapshot(&mut self, player: PlayerIndex) -> Standing {
        if !self.entries.contains_key(&player) {
            log::debug!("[ledger] P{} joined", player);
        }
        *self.entries.entry(player).or_default()
    }
    /// Standing of a player without registering them.
    pub fn peek(&self, player: PlayerIndex) -> Standing {
        self.entries.get(&player).copied().unwrap_or_default()
    }
    pub fn get(&self, player: PlayerIndex) -> Option<&Standing> {
        self.entries.get(&player)
    }
    pub fn apply_outcome(&mut self, player: PlayerIndex, payout: Score, reputation: Reputation) {
        self.entries
            .entry(player)
            .or_default()
            .apply(payout, reputation);
    }
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerIndex, &Standing)> {
        self.entries.iter()
    }
}
