use crate::*;

/// Tunable parameters of a game instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub round_duration: Seconds,
    pub score_scale: Score,
    pub max_bet: Amount,
    pub reputation_step: Reputation,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            round_duration: ROUND_DURATION,
            score_scale: SCORE_SCALE,
            max_bet: MAX_BET,
            reputation_step: REPUTATION_STEP,
        }
    }
}
