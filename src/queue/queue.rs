use super::*;
use crate::game::Rules;
use crate::ledger::PlayerLedger;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Proposed-but-unsettled actions in proposal order.
/// At most one action per player; emptied only by drain or clear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingActionQueue {
    actions: Vec<PendingAction>,
}

impl PendingActionQueue {
    /// Validates a wager and enqueues it. The ledger entry is created
    /// only once the proposal is known to be accepted.
    pub fn propose(
        &mut self,
        player: PlayerIndex,
        wager: i64,
        ledger: &mut PlayerLedger,
        rules: &Rules,
    ) -> Result<PendingAction, GameError> {
        let amount = Amount::try_from(wager)
            .ok()
            .filter(|amount| *amount > 0)
            .filter(|amount| *amount <= rules.max_bet)
            .ok_or(GameError::InvalidAmount(wager))?;
        if self.get(player).is_some() {
            return Err(GameError::DuplicatePending(player));
        }
        let action = PendingAction::new(player, amount, ledger.snapshot(player), rules);
        self.actions.push(action.clone());
        Ok(action)
    }

    pub fn support(
        &mut self,
        supporter: PlayerIndex,
        target: PlayerIndex,
        contribution: Weight,
    ) -> Result<Weight, GameError> {
        self.target(supporter, target)
            .map(|action| action.back(supporter, contribution))
    }

    pub fn withdraw(
        &mut self,
        supporter: PlayerIndex,
        target: PlayerIndex,
    ) -> Result<Weight, GameError> {
        self.target(supporter, target)
            .map(|action| action.unback(supporter))
    }

    /// Takes every pending action, leaving the queue empty.
    pub fn drain_all(&mut self) -> Vec<PendingAction> {
        std::mem::take(&mut self.actions)
    }

    /// Puts a drained working set back at the front of the queue.
    pub fn restore(&mut self, mut drained: Vec<PendingAction>) {
        drained.append(&mut self.actions);
        self.actions = drained;
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
    pub fn get(&self, player: PlayerIndex) -> Option<&PendingAction> {
        self.actions.iter().find(|a| a.player_index() == player)
    }
    pub fn iter(&self) -> impl Iterator<Item = &PendingAction> {
        self.actions.iter()
    }
    pub fn len(&self) -> usize {
        self.actions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    fn target(
        &mut self,
        supporter: PlayerIndex,
        target: PlayerIndex,
    ) -> Result<&mut PendingAction, GameError> {
        if supporter == target {
            return Err(GameError::SelfSupport(supporter));
        }
        self.actions
            .iter_mut()
            .find(|a| a.player_index() == target)
            .ok_or(GameError::UnknownAction(target))
    }
}

impl From<Vec<PendingAction>> for PendingActionQueue {
    fn from(actions: Vec<PendingAction>) -> Self {
        Self { actions }
    }
}
