use crate::Seconds;
use std::time::Duration;
use tokio::time::Instant;

/// Display countdown for the current round.
/// Expiry is informational only; nothing settles when it reaches zero.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: Duration,
    started: Instant,
}

impl Countdown {
    pub fn new(duration: Seconds) -> Self {
        Self {
            duration: Duration::from_secs(duration),
            started: Instant::now(),
        }
    }
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }
    pub fn remaining(&self) -> Seconds {
        self.duration
            .saturating_sub(self.started.elapsed())
            .as_secs()
    }
}
