//! CLI module
//!
//! Command-line interface over the endpoint bindings.
//!
//! # Commands
//!
//! - `box-score` - Traditional box score for a game
//! - `scoreboard` - Games and standings for a day
//! - `leaders` - League leaders
//! - `game-log` - A player's game log
//! - `player-info` - A player's profile
//! - `players` - Every player in a season
//! - `teams` - Static franchise list
//! - `raw` - Any endpoint, result sets printed as objects
//! - `serve` - HTTP server exposing the bindings as JSON

mod commands;
mod metrics;
mod runner;
mod server;

pub use commands::{parse_key_value, Cli, Commands, OutputFormat};
pub use metrics::{Metrics, MetricsSnapshot};
pub use runner::Runner;
pub use server::{router, serve, ServerConfig, SERVED_ENDPOINTS};
