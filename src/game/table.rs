use super::*;
use crate::ledger::PlayerLedger;
use crate::queue::PendingActionQueue;
use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;

/// Everything one game instance owns.
/// Held behind a single lock by the service; never shared piecemeal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub state: GameState,
    pub ledger: PlayerLedger,
    pub queue: PendingActionQueue,
    pub history: Vec<RoundRecord>,
}

impl Table {
    pub fn new(rules: &Rules) -> Self {
        Self {
            state: GameState::new(rules),
            ledger: PlayerLedger::default(),
            queue: PendingActionQueue::default(),
            history: Vec::new(),
        }
    }
    pub fn clear(&mut self, rules: &Rules) {
        self.queue.clear();
        self.ledger.clear();
        self.history.clear();
        self.state = GameState::new(rules);
    }

    /// Checks what settlement relies on but deserialization cannot see.
    /// Tables built through the engine always pass; restored ones may not.
    pub fn validate(&self, rules: &Rules) -> anyhow::Result<()> {
        let score = self.state.community_score();
        anyhow::ensure!(
            score.is_finite() && score >= 0.,
            "community score {} is negative or not finite",
            score
        );
        let reputations = REPUTATION_FLOOR..=REPUTATION_CEILING;
        for (player, standing) in self.ledger.iter() {
            anyhow::ensure!(
                reputations.contains(&standing.reputation()),
                "P{} reputation {} out of range",
                player,
                standing.reputation()
            );
            anyhow::ensure!(
                standing.cumulative_profit().is_finite(),
                "P{} cumulative profit is not finite",
                player
            );
        }
        let contributions = SUPPORT_BASE..=SUPPORT_BASE + SUPPORT_TRUST;
        let mut seen = BTreeSet::new();
        for action in self.queue.iter() {
            let player = action.player_index();
            anyhow::ensure!(seen.insert(player), "P{} has more than one pending action", player);
            anyhow::ensure!(
                self.ledger.get(player).is_some(),
                "P{} has a pending action but no ledger entry",
                player
            );
            anyhow::ensure!(
                (1..=rules.max_bet).contains(&action.amount()),
                "P{} wagered {} outside 1..={}",
                player,
                action.amount(),
                rules.max_bet
            );
            anyhow::ensure!(
                (-1.0..=1.0).contains(&action.alignment()),
                "P{} alignment {} out of range",
                player,
                action.alignment()
            );
            anyhow::ensure!(
                reputations.contains(&action.reputation()),
                "P{} proposed with reputation {} out of range",
                player,
                action.reputation()
            );
            for (supporter, weight) in action.supporters() {
                anyhow::ensure!(supporter != player, "P{} supports their own action", player);
                anyhow::ensure!(
                    contributions.contains(&weight),
                    "P{} lent P{} weight {} out of range",
                    supporter,
                    player,
                    weight
                );
            }
            let tally = action.supporters().map(|(_, w)| w).sum::<Weight>();
            anyhow::ensure!(
                (tally - action.support_weight()).abs() <= 1e-9,
                "P{} support weight {} disagrees with its supporters ({})",
                player,
                action.support_weight(),
                tally
            );
        }
        let mut last = 0;
        for record in self.history.iter() {
            anyhow::ensure!(
                record.round() > last && record.round() <= self.state.current_round(),
                "history round {} out of order",
                record.round()
            );
            last = record.round();
        }
        Ok(())
    }
}
