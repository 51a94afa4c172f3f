use crate::game::*;
use crate::ledger::PlayerLedger;
use crate::queue::PendingAction;
use crate::*;

/// Result of folding a drained working set against a declared outcome.
/// Computed without touching any shared state, so a failure here
/// leaves nothing to undo.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    outcome: Outcome,
    net_alignment: Alignment,
    payouts: Vec<Payout>,
}

impl Settlement {
    pub fn fold(
        actions: &[PendingAction],
        outcome: Outcome,
        ledger: &PlayerLedger,
        rules: &Rules,
    ) -> Result<Self, GameError> {
        let payouts = actions
            .iter()
            .map(|action| Self::check(action, ledger))
            .map(|action| action.and_then(|a| Self::payout(a, outcome, rules)))
            .collect::<Result<Vec<Payout>, GameError>>()?;
        let delta = payouts.iter().map(|p| p.payout).sum::<Score>();
        if !delta.is_finite() {
            return Err(GameError::internal(format!("round delta {} is not finite", delta)));
        }
        Ok(Self {
            outcome,
            net_alignment: Self::net(&payouts),
            payouts,
        })
    }

    /// Effective-weight-weighted mean alignment. Zero for an empty round.
    pub fn net(payouts: &[Payout]) -> Alignment {
        let total = payouts.iter().map(|p| p.effective_weight).sum::<Weight>();
        match total {
            t if t > 0. => {
                payouts
                    .iter()
                    .map(|p| p.effective_weight * p.alignment)
                    .sum::<Score>()
                    / t
            }
            _ => 0.,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn net_alignment(&self) -> Alignment {
        self.net_alignment
    }
    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }
    pub fn delta(&self) -> Score {
        self.payouts.iter().map(|p| p.payout).sum()
    }
    pub fn into_record(self, round: Round) -> RoundRecord {
        RoundRecord::new(round, self.outcome, self.net_alignment, self.payouts)
    }

    fn payout(
        action: &PendingAction,
        outcome: Outcome,
        rules: &Rules,
    ) -> Result<Payout, GameError> {
        let weight = action.effective_weight();
        let matched = outcome.matches(action.alignment());
        let sign = if matched { 1. } else { -1. };
        let payout = weight * sign * rules.score_scale;
        if !weight.is_finite() || !payout.is_finite() {
            return Err(GameError::internal(format!(
                "P{} payout {} from weight {} is not finite",
                action.player_index(),
                payout,
                weight
            )));
        }
        Ok(Payout {
            player_index: action.player_index(),
            amount: action.amount(),
            alignment: action.alignment(),
            effective_weight: weight,
            matched,
            payout,
            reputation_delta: sign * rules.reputation_step,
        })
    }

    fn check<'a>(
        action: &'a PendingAction,
        ledger: &PlayerLedger,
    ) -> Result<&'a PendingAction, GameError> {
        let player = action.player_index();
        if action.amount() == 0 {
            Err(GameError::internal(format!("P{} has a zero amount pending", player)))
        } else if !(-1.0..=1.0).contains(&action.alignment()) {
            Err(GameError::internal(format!(
                "P{} alignment {} outside [-1, 1]",
                player,
                action.alignment()
            )))
        } else if !(REPUTATION_FLOOR..=REPUTATION_CEILING).contains(&action.reputation()) {
            Err(GameError::internal(format!(
                "P{} reputation {} outside [{}, {}]",
                player,
                action.reputation(),
                REPUTATION_FLOOR,
                REPUTATION_CEILING
            )))
        } else if !(action.support_weight() >= 0. && action.support_weight().is_finite()) {
            Err(GameError::internal(format!(
                "P{} support weight {} is invalid",
                player,
                action.support_weight()
            )))
        } else if ledger.get(player).is_none() {
            Err(GameError::internal(format!("P{} proposed without a ledger entry", player)))
        } else {
            Ok(action)
        }
    }
}
