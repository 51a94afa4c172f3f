//! Settlement engine for a community betting game.
//!
//! Players propose weighted bets, other players lend those bets support,
//! and a settlement step folds every pending bet into a shared community
//! score while advancing the round counter.
//!
//! ## Architecture
//!
//! - [`ledger`]: Per-player reputation and cumulative profit
//! - [`queue`]: Proposed-but-unsettled actions and their support tallies
//! - [`game`]: Authoritative game state, outcomes, and the owned [`game::Table`]
//! - [`engine`]: The `IDLE`/`SETTLING` state machine and the settlement fold
//! - [`service`]: Concurrency boundary translating commands into engine calls
//! - [`storage`]: Snapshot durability at process boundaries
//! - [`hosting`]: HTTP surface over the service

pub mod engine;
pub mod error;
pub mod game;
pub mod ledger;
pub mod queue;
pub mod service;
pub mod storage;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod hosting;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Identifies a player across rounds.
pub type PlayerIndex = usize;
/// Wagered quantity of a proposal.
pub type Amount = u64;
/// Settled round counter.
pub type Round = u64;
/// Community score, payouts, and cumulative profits.
pub type Score = f64;
/// Trust in a player, always within [REPUTATION_FLOOR, REPUTATION_CEILING].
pub type Reputation = f64;
/// Directional stance of a bet, always within [-1, 1].
pub type Alignment = f64;
/// Support contributed to a pending action.
pub type Weight = f64;
/// Countdown granularity for the round timer.
pub type Seconds = u64;

// ============================================================================
// ROUND PARAMETERS
// ============================================================================
/// Length of a round as displayed by the countdown (5:00).
pub const ROUND_DURATION: Seconds = 300;
/// Multiplier converting effective weight into community score.
pub const SCORE_SCALE: Score = 0.1;
/// Largest accepted wager.
pub const MAX_BET: Amount = 80;

// ============================================================================
// REPUTATION
// Ledger entries start neutral and move by a fixed step per settled bet.
// ============================================================================
/// Reputation assigned to a player on first proposal.
pub const REPUTATION_DEFAULT: Reputation = 0.5;
/// Reputation gained on a matching bet, lost on a missed one.
pub const REPUTATION_STEP: Reputation = 0.05;
/// Lower clamp for reputation.
pub const REPUTATION_FLOOR: Reputation = 0.0;
/// Upper clamp for reputation.
pub const REPUTATION_CEILING: Reputation = 1.0;

// ============================================================================
// SUPPORT
// A supporter contributes SUPPORT_BASE + SUPPORT_TRUST * reputation.
// ============================================================================
/// Contribution floor so that even distrusted supporters count.
pub const SUPPORT_BASE: Weight = 0.5;
/// Share of contribution scaled by the supporter's reputation.
pub const SUPPORT_TRUST: Weight = 0.5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
