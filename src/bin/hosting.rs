//! hosting Server Binary
//!
//! Runs the HTTP server for the community betting game.
//! Configured by flags or environment (BIND_ADDR, SNAPSHOT_PATH, ...).

use clap::Parser;
use synergy::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    hosting::Server::run(config::Config::parse()).await
}
