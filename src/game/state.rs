use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Authoritative snapshot of the game as shown to clients.
/// Mutated only by settlement and reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    community_score: Score,
    current_round: Round,
    active_players: u64,
    time_remaining: Seconds,
}

impl GameState {
    pub fn new(rules: &Rules) -> Self {
        Self {
            community_score: 0.,
            current_round: 0,
            active_players: 0,
            time_remaining: rules.round_duration,
        }
    }
    pub fn community_score(&self) -> Score {
        self.community_score
    }
    pub fn current_round(&self) -> Round {
        self.current_round
    }
    pub fn active_players(&self) -> u64 {
        self.active_players
    }
    pub fn time_remaining(&self) -> Seconds {
        self.time_remaining
    }
    /// Same snapshot with the countdown replaced, for display.
    pub fn remaining(self, time_remaining: Seconds) -> Self {
        Self {
            time_remaining,
            ..self
        }
    }
    /// The state after folding a settled round into this one.
    /// Fails rather than committing a non-finite score or an overflowing round.
    pub fn advance(&self, delta: Score, active: usize, rules: &Rules) -> Result<Self, GameError> {
        let community_score = self.community_score + delta;
        if !community_score.is_finite() {
            return Err(GameError::internal(format!(
                "community score {} + {} is not finite",
                self.community_score, delta
            )));
        }
        Ok(Self {
            community_score: community_score.max(0.),
            current_round: self
                .current_round
                .checked_add(1)
                .ok_or_else(|| GameError::internal("round counter overflow"))?,
            active_players: active as u64,
            time_remaining: rules.round_duration,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Rules::default())
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "round {} score {:.2} players {} ({}:{:02})",
            self.current_round,
            self.community_score,
            self.active_players,
            self.time_remaining / 60,
            self.time_remaining % 60
        )
    }
}
