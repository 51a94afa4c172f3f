use crate::ErrorKind;
use crate::GameError;
use crate::PlayerIndex;
use crate::Weight;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResponse {
    pub target_player_index: PlayerIndex,
    pub support_weight: Weight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
    pub retryable: bool,
}

impl ErrorResponse {
    /// A request that never reached the game because it did not parse.
    pub fn malformed<E: std::fmt::Display>(e: &E) -> Self {
        Self {
            error: e.to_string(),
            kind: label(ErrorKind::Validation),
            retryable: false,
        }
    }
}

impl From<&GameError> for ErrorResponse {
    fn from(e: &GameError) -> Self {
        Self {
            error: e.to_string(),
            kind: label(e.kind()),
            retryable: e.is_retryable(),
        }
    }
}

fn label(kind: ErrorKind) -> String {
    format!("{:?}", kind).to_lowercase()
}
