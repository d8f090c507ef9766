//! Endpoint bindings
//!
//! Each endpoint pairs a request type with the records it decodes into.
//! [`fetch`] validates the request, sends it through any
//! [`StatsTransport`] and maps the returned result sets.
//!
//! # Example
//!
//! ```rust,no_run
//! use nba_stats::endpoints::{fetch, BoxScoreTraditionalRequest};
//! use nba_stats::http::HttpClient;
//!
//! # async fn run() -> nba_stats::Result<()> {
//! let client = HttpClient::new()?;
//! let response = fetch(&client, &BoxScoreTraditionalRequest::new("0022300001")).await?;
//! for player in &response.data.player_stats {
//!     println!("{} {}", player.player_name, player.pts);
//! }
//! # Ok(())
//! # }
//! ```

mod box_score;
mod common_all_players;
mod common_player_info;
mod league_leaders;
mod player_game_log;
mod scoreboard;

pub use box_score::{
    BoxScorePlayerStats, BoxScoreStarterBenchStats, BoxScoreTeamStats, BoxScoreTraditional,
    BoxScoreTraditionalRequest,
};
pub use common_all_players::{CommonAllPlayer, CommonAllPlayers, CommonAllPlayersRequest};
pub use common_player_info::{
    AvailableSeason, CommonPlayerInfo, CommonPlayerInfoRequest, PlayerHeadlineStats, PlayerInfo,
};
pub use league_leaders::{LeagueLeader, LeagueLeaders, LeagueLeadersRequest};
pub use player_game_log::{GameLogEntry, PlayerGameLog, PlayerGameLogRequest};
pub use scoreboard::{
    Available, EastConfStandingsByDay, GameHeader, LastMeeting, LineScore, Scoreboard,
    ScoreboardRequest, SeriesStandings, WestConfStandingsByDay,
};

use crate::decode::StatsEnvelope;
use crate::error::Result;
use crate::http::StatsTransport;
use crate::params::QueryParams;
use serde::Serialize;
use tracing::debug;

/// A request that can be sent to one stats endpoint
pub trait Endpoint: Send + Sync {
    /// Endpoint name appended to the base URL
    const PATH: &'static str;

    /// Decoded response body
    type Output: Send;

    /// Validate the request and build its query string
    ///
    /// Runs before any network activity.
    fn params(&self) -> Result<QueryParams>;

    /// Map the result sets of a response; never fails
    fn decode(envelope: &StatsEnvelope) -> Self::Output;
}

/// Decoded data plus the transport metadata of the call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResponse<T> {
    pub data: T,
    pub status_code: u16,
    pub url: String,
}

impl<T> StatsResponse<T> {
    /// Transform the data, keeping status and URL
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StatsResponse<U> {
        StatsResponse {
            data: f(self.data),
            status_code: self.status_code,
            url: self.url,
        }
    }
}

/// Validate `request`, send it and decode the response
pub async fn fetch<E, T>(transport: &T, request: &E) -> Result<StatsResponse<E::Output>>
where
    E: Endpoint,
    T: StatsTransport + ?Sized,
{
    let params = request.params()?;
    debug!(endpoint = E::PATH, params = params.len(), "Fetching endpoint");

    let raw = transport.fetch(E::PATH, &params).await?;
    let data = E::decode(&raw.envelope);

    Ok(StatsResponse {
        data,
        status_code: raw.status_code,
        url: raw.url,
    })
}

/// Fetch an arbitrary endpoint without decoding its result sets
pub async fn fetch_raw<T>(
    transport: &T,
    endpoint: &str,
    params: &QueryParams,
) -> Result<StatsResponse<StatsEnvelope>>
where
    T: StatsTransport + ?Sized,
{
    let raw = transport.fetch(endpoint, params).await?;
    Ok(StatsResponse {
        data: raw.envelope,
        status_code: raw.status_code,
        url: raw.url,
    })
}
