use crate::PlayerIndex;

/// Broad classes of failure, used by callers to decide on retry policy
/// and by the HTTP layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller mistake. Nothing changed; retrying the same call fails again.
    Validation,
    /// Another settlement is in flight. Safe to retry after backoff.
    Concurrency,
    /// An invariant broke inside the critical section. Nothing was committed.
    Internal,
}

/// Every way a command against the game can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    InvalidAmount(i64),
    DuplicatePending(PlayerIndex),
    UnknownAction(PlayerIndex),
    SelfSupport(PlayerIndex),
    AlreadySettling,
    Busy,
    Internal(String),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAmount(_)
            | Self::DuplicatePending(_)
            | Self::UnknownAction(_)
            | Self::SelfSupport(_) => ErrorKind::Validation,
            Self::AlreadySettling | Self::Busy => ErrorKind::Concurrency,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Concurrency
    }
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount(n) => write!(f, "invalid amount: {}", n),
            Self::DuplicatePending(p) => write!(f, "player {} already has a pending action", p),
            Self::UnknownAction(p) => write!(f, "no pending action for player {}", p),
            Self::SelfSupport(p) => write!(f, "player {} cannot support their own action", p),
            Self::AlreadySettling => write!(f, "settlement already in progress"),
            Self::Busy => write!(f, "settlement in progress, retry after it completes"),
            Self::Internal(s) => write!(f, "internal error: {}", s),
        }
    }
}

impl std::error::Error for GameError {}
