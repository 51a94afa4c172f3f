use crate::game::Rules;
use crate::storage::Disk;
use crate::*;
use clap::Parser;
use std::path::PathBuf;

/// Server configuration. Every flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Hosts the community betting game over HTTP",
    long_about = None
)]
pub struct Config {
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
    pub bind: String,
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
    #[arg(
        long,
        env = "ROUND_DURATION",
        default_value_t = ROUND_DURATION,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Round countdown in seconds"
    )]
    pub round_duration: Seconds,
    #[arg(long, env = "SCORE_SCALE", default_value_t = SCORE_SCALE, value_parser = positive)]
    pub score_scale: Score,
    #[arg(
        long,
        env = "MAX_BET",
        default_value_t = MAX_BET,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_bet: Amount,
    #[arg(
        long,
        env = "REPUTATION_STEP",
        default_value_t = REPUTATION_STEP,
        value_parser = fraction
    )]
    pub reputation_step: Reputation,
    #[arg(
        long,
        env = "SNAPSHOT_PATH",
        help = "Load the table from here at startup and save it at shutdown"
    )]
    pub snapshot: Option<PathBuf>,
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules {
            round_duration: self.round_duration,
            score_scale: self.score_scale,
            max_bet: self.max_bet,
            reputation_step: self.reputation_step,
        }
    }
    pub fn storage(&self) -> Option<Disk> {
        self.snapshot
            .clone()
            .map(|path| Disk::new(path, self.rules()))
    }
}

/// finite and strictly positive
fn positive(arg: &str) -> Result<f64, String> {
    match arg.parse::<f64>().map_err(|e| e.to_string())? {
        x if x.is_finite() && x > 0. => Ok(x),
        x => Err(format!("{} is not a positive finite number", x)),
    }
}

/// within [0, 1]
fn fraction(arg: &str) -> Result<f64, String> {
    match arg.parse::<f64>().map_err(|e| e.to_string())? {
        x if (0.0..=1.0).contains(&x) => Ok(x),
        x => Err(format!("{} is not within [0, 1]", x)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn defaults_match_rules() {
        let config = Config::try_parse_from(["hosting"]).unwrap();
        assert_eq!(config.rules(), Rules::default());
        assert!(config.storage().is_none());
    }
    #[test]
    fn flags_override() {
        let config = Config::try_parse_from([
            "hosting",
            "--max-bet",
            "40",
            "--round-duration",
            "60",
            "--snapshot",
            "state/table.json",
        ])
        .unwrap();
        assert_eq!(config.rules().max_bet, 40);
        assert_eq!(config.rules().round_duration, 60);
        assert_eq!(
            config.storage().unwrap().path(),
            std::path::Path::new("state/table.json")
        );
    }
    #[test]
    fn rejects_degenerate_rules() {
        for args in [
            ["hosting", "--max-bet", "0"],
            ["hosting", "--round-duration", "0"],
            ["hosting", "--score-scale", "NaN"],
            ["hosting", "--score-scale=-0.1", "--max-bet=80"],
            ["hosting", "--reputation-step=-0.05", "--max-bet=80"],
            ["hosting", "--reputation-step", "2"],
        ] {
            assert!(Config::try_parse_from(args).is_err(), "{:?} was accepted", args);
        }
        let config = Config::try_parse_from(["hosting", "--reputation-step", "0"]).unwrap();
        assert_eq!(config.rules().reputation_step, 0.);
    }
    #[test]
    fn rejects_garbage() {
        assert!(Config::try_parse_from(["hosting", "--max-bet", "lots"]).is_err());
    }
}
