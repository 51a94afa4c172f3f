use super::*;
use crate::game::*;
use crate::queue::PendingAction;
use crate::*;

/// Drives a [`Table`] through propose → support → run → reset.
///
/// The engine holds only rules and the phase gate. Tables are passed in
/// by the caller, who is responsible for holding them exclusively for the
/// duration of each call.
#[derive(Debug, Default)]
pub struct SettlementEngine {
    rules: Rules,
    gate: Gate,
}

impl SettlementEngine {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            gate: Gate::default(),
        }
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn phase(&self) -> Phase {
        self.gate.phase()
    }
    pub fn admit(&self) -> Result<Admission<'_>, GameError> {
        self.gate.admit()
    }
}

impl SettlementEngine {
    pub fn propose(
        &self,
        table: &mut Table,
        player: PlayerIndex,
        wager: i64,
    ) -> Result<PendingAction, GameError> {
        table
            .queue
            .propose(player, wager, &mut table.ledger, &self.rules)
    }

    /// Adds (`support == true`) or withdraws a supporter's backing.
    /// Contribution scales with the supporter's current reputation.
    pub fn support(
        &self,
        table: &mut Table,
        supporter: PlayerIndex,
        target: PlayerIndex,
        support: bool,
    ) -> Result<Weight, GameError> {
        match support {
            true => {
                let contribution = table.ledger.peek(supporter).contribution();
                table.queue.support(supporter, target, contribution)
            }
            false => table.queue.withdraw(supporter, target),
        }
    }

    /// Admits and settles in one step.
    pub fn run(&self, table: &mut Table, outcome: Outcome) -> Result<GameState, GameError> {
        let admission = self.admit()?;
        self.settle(&admission, table, outcome)
    }

    /// Folds every pending action into the table.
    ///
    /// Either the whole round commits (ledger, state, history, empty queue)
    /// or none of it does and the drained actions go back into the queue.
    pub fn settle(
        &self,
        _: &Admission<'_>,
        table: &mut Table,
        outcome: Outcome,
    ) -> Result<GameState, GameError> {
        let drained = table.queue.drain_all();
        log::debug!("[engine] settling {} actions as {}", drained.len(), outcome);
        let folded = Settlement::fold(&drained, outcome, &table.ledger, &self.rules);
        match folded.and_then(|settlement| {
            table
                .state
                .advance(settlement.delta(), table.ledger.active_count(), &self.rules)
                .map(|state| (settlement, state))
        }) {
            Err(e) => {
                log::error!("[engine] settlement aborted: {}", e);
                table.queue.restore(drained);
                Err(e)
            }
            Ok((settlement, state)) => {
                for p in settlement.payouts() {
                    table
                        .ledger
                        .apply_outcome(p.player_index, p.payout, p.reputation_delta);
                }
                let record = settlement.into_record(state.current_round());
                log::info!("[engine] settled {}", record);
                table.history.push(record);
                table.state = state;
                Ok(state)
            }
        }
    }

    /// Clears the table back to defaults. Refused while a run is in flight.
    pub fn reset(&self, table: &mut Table) -> Result<GameState, GameError> {
        match self.phase() {
            Phase::Settling => Err(GameError::Busy),
            Phase::Idle => {
                table.clear(&self.rules);
                log::info!("[engine] reset");
                Ok(table.state)
            }
        }
    }
}
