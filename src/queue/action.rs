use crate::game::Rules;
use crate::ledger::Standing;
use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// A proposed bet waiting for the next settlement.
/// Reputation and profit are snapshots taken when the bet was proposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingAction {
    player_index: PlayerIndex,
    amount: Amount,
    alignment: Alignment,
    reputation: Reputation,
    cumulative_profit: Score,
    support_weight: Weight,
    supporters: BTreeMap<PlayerIndex, Weight>,
}

impl PendingAction {
    pub fn new(player: PlayerIndex, amount: Amount, standing: Standing, rules: &Rules) -> Self {
        Self {
            player_index: player,
            amount,
            alignment: Self::stance(amount, standing.reputation(), rules.max_bet),
            reputation: standing.reputation(),
            cumulative_profit: standing.cumulative_profit(),
            support_weight: 0.,
            supporters: BTreeMap::new(),
        }
    }

    /// Directional stance of a bet.
    ///
    /// Reputation sets the baseline: trusted players lean with the
    /// community (positive), distrusted players against it. Conviction,
    /// the share of the bet cap being wagered, pulls the stance back
    /// toward neutral: a measured bet adds up to +0.5, a max bet adds 0.
    ///
    /// `alignment = clamp((2r - 1) + (1 - amount / max_bet) / 2, -1, 1)`
    pub fn stance(amount: Amount, reputation: Reputation, max_bet: Amount) -> Alignment {
        let conviction = match max_bet {
            0 => 1.,
            cap => amount.min(cap) as f64 / cap as f64,
        };
        ((2. * reputation - 1.) + (1. - conviction) / 2.).clamp(-1., 1.)
    }

    pub fn player_index(&self) -> PlayerIndex {
        self.player_index
    }
    pub fn amount(&self) -> Amount {
        self.amount
    }
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
    pub fn reputation(&self) -> Reputation {
        self.reputation
    }
    pub fn cumulative_profit(&self) -> Score {
        self.cumulative_profit
    }
    pub fn support_weight(&self) -> Weight {
        self.support_weight
    }
    /// Each backer with the weight they contributed.
    pub fn supporters(&self) -> impl Iterator<Item = (PlayerIndex, Weight)> {
        self.supporters.iter().map(|(p, w)| (*p, *w))
    }
    pub fn is_supported_by(&self, supporter: PlayerIndex) -> bool {
        self.supporters.contains_key(&supporter)
    }
    /// Amount amplified by accumulated support.
    pub fn effective_weight(&self) -> Weight {
        self.amount as f64 * (1. + self.support_weight)
    }

    /// Records support once per supporter. Repeats are no-ops.
    pub(crate) fn back(&mut self, supporter: PlayerIndex, contribution: Weight) -> Weight {
        if !self.supporters.contains_key(&supporter) {
            self.supporters.insert(supporter, contribution);
            self.tally();
        }
        self.support_weight
    }
    pub(crate) fn unback(&mut self, supporter: PlayerIndex) -> Weight {
        if self.supporters.remove(&supporter).is_some() {
            self.tally();
        }
        self.support_weight
    }
    fn tally(&mut self) {
        self.support_weight = self.supporters.values().sum();
    }
}

impl std::fmt::Display for PendingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "P{} bets {} ({:+.3}) backed {:.2}",
            self.player_index, self.amount, self.alignment, self.support_weight
        )
    }
}
