// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # nba-stats
//!
//! A typed client for the tabular JSON API behind stats.nba.com.
//!
//! Every response from the service has the same shape: a list of named
//! result sets, each with a header row and rows of loosely typed cells.
//! This crate turns those rows into plain Rust structs.
//!
//! ## Features
//!
//! - **Total coercion**: cells become `i64`, `f64` or `String` without ever failing
//! - **Declarative records**: one [`stats_record!`] line per column
//! - **Typed parameters**: seasons, leagues and stat categories validated up front
//! - **Swappable transport**: any [`StatsTransport`](http::StatsTransport) can serve requests
//! - **Server mode**: `nba-stats serve` exposes the bindings as a JSON HTTP API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::endpoints::{fetch, LeagueLeadersRequest};
//! use nba_stats::http::HttpClient;
//! use nba_stats::params::{PerMode, Season};
//!
//! #[tokio::main]
//! async fn main() -> nba_stats::Result<()> {
//!     let client = HttpClient::new()?;
//!     let request = LeagueLeadersRequest::new()
//!         .season(Season::new(2023))
//!         .per_mode(PerMode::PerGame);
//!
//!     let response = fetch(&client, &request).await?;
//!     for leader in response.data.league_leaders.iter().take(5) {
//!         println!("{:>2} {:<24} {:.1}", leader.rank, leader.player, leader.pts);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   params()   ┌─────────────┐   fetch()   ┌──────────────┐
//! │   Endpoint   │ ───────────▶ │ QueryParams │ ──────────▶ │  Transport   │
//! │   request    │              └─────────────┘             │ (HttpClient) │
//! └──────────────┘                                          └──────┬───────┘
//!        ▲                                                         │
//!        │ decode()        ┌───────────────┐                       │
//!        └──────────────── │ StatsEnvelope │ ◀─────────────────────┘
//!                          │  result sets  │
//!                          └───────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Loose values, result sets and row mapping
pub mod decode;

/// Typed request parameters
pub mod params;

/// HTTP transport
pub mod http;

/// Endpoint bindings
pub mod endpoints;

/// Static franchise data
pub mod teams;

/// Player name search
pub mod players;

/// Client settings
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use config::ClientSettings;
pub use decode::{LooseValue, NumericStrings, Record, ResultSet, StatsEnvelope};
pub use endpoints::{fetch, Endpoint, StatsResponse};
pub use http::{HttpClient, HttpClientConfig, StatsTransport};
pub use params::{QueryParams, Season};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
