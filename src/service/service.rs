use crate::engine::*;
use crate::game::*;
use crate::queue::PendingAction;
use crate::*;
use tokio::sync::RwLock;

/// Table plus its display countdown, guarded together.
#[derive(Debug)]
struct Live {
    table: Table,
    countdown: Countdown,
}

/// Boundary between callers and the settlement engine.
///
/// Every mutating command takes the single write guard for the game, so no
/// two of them interleave. Queries take the read guard and therefore only
/// ever see fully committed state. A second `run` does not wait for the
/// first: the engine's phase gate rejects it before it reaches the lock.
#[derive(Debug)]
pub struct GameService {
    engine: SettlementEngine,
    live: RwLock<Live>,
}

impl Default for GameService {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl GameService {
    pub fn new(rules: Rules) -> Self {
        Self::restore(rules, Table::new(&rules))
    }
    /// Resumes from a previously saved table. The countdown starts fresh.
    pub fn restore(rules: Rules, table: Table) -> Self {
        Self {
            live: RwLock::new(Live {
                countdown: Countdown::new(rules.round_duration),
                table,
            }),
            engine: SettlementEngine::new(rules),
        }
    }
    pub fn rules(&self) -> &Rules {
        self.engine.rules()
    }
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }
}

impl GameService {
    pub async fn state(&self) -> GameState {
        let live = self.live.read().await;
        live.table.state.remaining(live.countdown.remaining())
    }
    pub async fn pending(&self) -> Vec<PendingAction> {
        self.live.read().await.table.queue.iter().cloned().collect()
    }
    pub async fn history(&self) -> Vec<RoundRecord> {
        self.live.read().await.table.history.clone()
    }
    /// Reputation and profit of every player, with any bet still pending.
    pub async fn players(&self) -> Vec<PlayerStatus> {
        self.live.read().await.table.roster()
    }
    /// Full copy of the table for persistence.
    pub async fn snapshot(&self) -> Table {
        self.live.read().await.table.clone()
    }
}

impl GameService {
    pub async fn propose(
        &self,
        player: PlayerIndex,
        wager: i64,
    ) -> Result<PendingAction, GameError> {
        let mut guard = self.live.write().await;
        let live = &mut *guard;
        self.engine
            .propose(&mut live.table, player, wager)
            .inspect(|a| log::debug!("[service] proposed {}", a))
            .inspect_err(|e| log::warn!("[service] propose rejected: {}", e))
    }
    pub async fn support(
        &self,
        supporter: PlayerIndex,
        target: PlayerIndex,
        support: bool,
    ) -> Result<Weight, GameError> {
        let mut guard = self.live.write().await;
        let live = &mut *guard;
        self.engine
            .support(&mut live.table, supporter, target, support)
            .inspect(|w| log::debug!("[service] P{} backing P{} → {:.3}", supporter, target, w))
            .inspect_err(|e| log::warn!("[service] support rejected: {}", e))
    }
    pub async fn run(&self, outcome: Outcome) -> Result<GameState, GameError> {
        let admission = self
            .engine
            .admit()
            .inspect_err(|e| log::warn!("[service] run rejected: {}", e))?;
        let mut guard = self.live.write().await;
        let live = &mut *guard;
        let result = self
            .engine
            .settle(&admission, &mut live.table, outcome)
            .inspect(|_| live.countdown.restart());
        drop(admission);
        result
    }
    pub async fn reset(&self) -> Result<GameState, GameError> {
        let mut guard = self.live.write().await;
        let live = &mut *guard;
        self.engine
            .reset(&mut live.table)
            .inspect(|_| live.countdown.restart())
            .inspect_err(|e| log::warn!("[service] reset rejected: {}", e))
    }
}
