use crate::game::Outcome;
use crate::PlayerIndex;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposeRequest {
    #[serde(alias = "playerIndex")]
    pub player_index: PlayerIndex,
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportRequest {
    #[serde(alias = "supporterIndex", alias = "supporter_index")]
    pub supporter: PlayerIndex,
    #[serde(default = "backing")]
    pub support: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub outcome: Outcome,
}

fn backing() -> bool {
    true
}
