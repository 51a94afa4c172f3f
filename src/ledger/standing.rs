use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A player's ledger entry.
/// Reputation stays within [REPUTATION_FLOOR, REPUTATION_CEILING];
/// cumulative profit is the running sum of settled payouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    reputation: Reputation,
    cumulative_profit: Score,
}

impl Standing {
    pub fn new(reputation: Reputation, cumulative_profit: Score) -> Self {
        Self {
            reputation: reputation.clamp(REPUTATION_FLOOR, REPUTATION_CEILING),
            cumulative_profit,
        }
    }
    pub fn reputation(&self) -> Reputation {
        self.reputation
    }
    pub fn cumulative_profit(&self) -> Score {
        self.cumulative_profit
    }
    /// Weight this player lends to another player's action.
    pub fn contribution(&self) -> Weight {
        SUPPORT_BASE + SUPPORT_TRUST * self.reputation
    }
    pub fn apply(&mut self, payout: Score, reputation: Reputation) {
        self.cumulative_profit += payout;
        self.reputation =
            (self.reputation + reputation).clamp(REPUTATION_FLOOR, REPUTATION_CEILING);
    }
}

impl Default for Standing {
    fn default() -> Self {
        Self {
            reputation: REPUTATION_DEFAULT,
            cumulative_profit: 0.,
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "rep {:.2} pnl {:+.2}", self.reputation, self.cumulative_profit)
    }
}
