use crate::Alignment;
use serde::Deserialize;
use serde::Serialize;

/// Declared result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[serde(alias = "WIN", alias = "Win")]
    Win,
    #[serde(alias = "LOSE", alias = "Lose")]
    Lose,
}

impl Outcome {
    /// Whether a stance agrees with this outcome. Neutral stances never do.
    pub fn matches(&self, alignment: Alignment) -> bool {
        match self {
            Self::Win => alignment > 0.,
            Self::Lose => alignment < 0.,
        }
    }
}

impl TryFrom<&str> for Outcome {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "win" => Ok(Self::Win),
            "lose" => Ok(Self::Lose),
            _ => Err(format!("unknown outcome: {}", s)),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "WIN"),
            Self::Lose => write!(f, "LOSE"),
        }
    }
}
