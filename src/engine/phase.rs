use crate::GameError;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

/// Lifecycle of the settlement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Settling,
}

impl From<u8> for Phase {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Idle,
            _ => Self::Settling,
        }
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Idle => 0,
            Phase::Settling => 1,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Settling => write!(f, "SETTLING"),
        }
    }
}

/// Shared phase cell. The only transition out of `Idle` is [`Gate::admit`],
/// and the only way back is dropping the [`Admission`] it returns.
#[derive(Debug, Default)]
pub struct Gate(AtomicU8);

impl Gate {
    pub fn phase(&self) -> Phase {
        Phase::from(self.0.load(Ordering::Acquire))
    }
    /// IDLE → SETTLING, or AlreadySettling if someone else got there first.
    pub fn admit(&self) -> Result<Admission<'_>, GameError> {
        self.0
            .compare_exchange(
                Phase::Idle.into(),
                Phase::Settling.into(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map(|_| Admission(self))
            .map_err(|_| GameError::AlreadySettling)
    }
}

/// Proof that the holder owns the `Settling` phase.
/// Dropping it returns the gate to `Idle`, whether settlement
/// succeeded, failed, or unwound.
#[derive(Debug)]
pub struct Admission<'a>(&'a Gate);

impl Drop for Admission<'_> {
    fn drop(&mut self) {
        self.0.0.store(Phase::Idle.into(), Ordering::Release);
    }
}
