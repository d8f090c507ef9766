//! CLI commands and argument parsing

use crate::params::{LeagueId, PerMode, Season, SeasonType, StatCategory};
use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// Query the NBA stats API from the command line
#[derive(Parser, Debug)]
#[command(name = "nba-stats")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the stats service
    #[arg(long, global = true, env = "NBA_STATS_BASE_URL")]
    pub base_url: Option<String>,

    /// Client settings file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Traditional box score for a game
    BoxScore {
        /// Game ID, e.g. 0022300001
        game_id: String,

        #[arg(long)]
        start_period: Option<u32>,

        #[arg(long)]
        end_period: Option<u32>,
    },

    /// Games and standings for a day
    Scoreboard {
        /// YYYY-MM-DD or MM/DD/YYYY (defaults to today)
        date: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        day_offset: Option<i32>,

        #[arg(long)]
        league: Option<LeagueId>,
    },

    /// League leaders for a stat category
    Leaders {
        /// Season, e.g. 2023-24
        #[arg(long)]
        season: Option<Season>,

        #[arg(long, default_value = "Totals")]
        per_mode: PerMode,

        #[arg(long, default_value = "Regular Season")]
        season_type: SeasonType,

        #[arg(long, default_value = "PTS")]
        stat: StatCategory,

        /// Only active players
        #[arg(long)]
        active: bool,
    },

    /// Game log for a player
    GameLog {
        player_id: String,

        #[arg(long)]
        season: Option<Season>,

        #[arg(long, default_value = "Regular Season")]
        season_type: SeasonType,

        /// First date, MM/DD/YYYY
        #[arg(long)]
        from: Option<String>,

        /// Last date, MM/DD/YYYY
        #[arg(long)]
        to: Option<String>,
    },

    /// Profile and headline stats for a player
    PlayerInfo { player_id: String },

    /// Every player in a season
    Players {
        /// Season, e.g. 2023-24 (defaults to the current season)
        #[arg(long)]
        season: Option<Season>,

        /// Only players on a current roster
        #[arg(long)]
        current_only: bool,

        /// Filter by name, ignoring case and accents
        #[arg(long)]
        search: Option<String>,
    },

    /// List franchises (no network access)
    Teams {
        /// Filter by name, nickname, abbreviation or city
        #[arg(long)]
        search: Option<String>,
    },

    /// Call any endpoint and print its result sets as objects
    Raw {
        /// Endpoint name, e.g. teamdetails
        endpoint: String,

        /// Query parameter as KEY=VALUE (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "8080")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

/// Parse `KEY=VALUE`; the value may itself contain `=`
pub fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}
