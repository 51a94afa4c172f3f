use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// What settlement did to a single pending action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub player_index: PlayerIndex,
    pub amount: Amount,
    pub alignment: Alignment,
    pub effective_weight: Weight,
    pub matched: bool,
    pub payout: Score,
    pub reputation_delta: Reputation,
}

impl std::fmt::Display for Payout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "P{:<3} {:>4} x{:<7.3} {:<5} {:+.3}",
            self.player_index,
            self.amount,
            self.effective_weight,
            if self.matched { "hit" } else { "miss" },
            self.payout
        )
    }
}

/// Entry in the settlement log, one per successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    round: Round,
    outcome: Outcome,
    net_alignment: Alignment,
    delta: Score,
    payouts: Vec<Payout>,
}

impl RoundRecord {
    pub fn new(
        round: Round,
        outcome: Outcome,
        net_alignment: Alignment,
        payouts: Vec<Payout>,
    ) -> Self {
        Self {
            round,
            outcome,
            net_alignment,
            delta: payouts.iter().map(|p| p.payout).sum(),
            payouts,
        }
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn net_alignment(&self) -> Alignment {
        self.net_alignment
    }
    /// Sum of payouts before the score floor is applied.
    pub fn delta(&self) -> Score {
        self.delta
    }
    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "round {} {} net {:+.3} delta {:+.3}",
            self.round, self.outcome, self.net_alignment, self.delta
        )?;
        for payout in self.payouts.iter() {
            writeln!(f, "  {}", payout)?;
        }
        Ok(())
    }
}
