//! `leagueleaders`: league-wide ranking by one stat category

use super::Endpoint;
use crate::decode::{decode_records, Lookup, StatsEnvelope};
use crate::error::Result;
use crate::params::{LeagueId, PerMode, QueryParams, Season, SeasonType, StatCategory};
use serde::Serialize;

/// Request for a leaderboard
///
/// Every enumerated parameter has a default, so `LeagueLeadersRequest::default()`
/// asks for regular-season NBA scoring totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueLeadersRequest {
    pub league_id: LeagueId,
    pub per_mode: PerMode,
    pub season: Option<Season>,
    pub season_type: SeasonType,
    pub stat_category: StatCategory,
    /// `Y` to include only active players
    pub active_flag: Option<String>,
}

impl LeagueLeadersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    #[must_use]
    pub fn per_mode(mut self, per_mode: PerMode) -> Self {
        self.per_mode = per_mode;
        self
    }

    #[must_use]
    pub fn season_type(mut self, season_type: SeasonType) -> Self {
        self.season_type = season_type;
        self
    }

    #[must_use]
    pub fn stat_category(mut self, stat_category: StatCategory) -> Self {
        self.stat_category = stat_category;
        self
    }

    #[must_use]
    pub fn active_only(mut self) -> Self {
        self.active_flag = Some("Y".to_string());
        self
    }
}

crate::stats_record! {
    /// One ranked player
    pub struct LeagueLeader in "LeagueLeaders" {
        [0] "PLAYER_ID" => player_id: i64,
        [1] "RANK" => rank: i64,
        [2] "PLAYER" => player: String,
        [3] "TEAM" => team: String,
        [4] "GP" => games_played: i64,
        [5] "MIN" => minutes: f64,
        [6] "FGM" => fgm: f64,
        [7] "FGA" => fga: f64,
        [8] "FG_PCT" => fg_pct: f64,
        [9] "FG3M" => fg3m: f64,
        [10] "FG3A" => fg3a: f64,
        [11] "FG3_PCT" => fg3_pct: f64,
        [12] "FTM" => ftm: f64,
        [13] "FTA" => fta: f64,
        [14] "FT_PCT" => ft_pct: f64,
        [15] "OREB" => oreb: f64,
        [16] "DREB" => dreb: f64,
        [17] "REB" => reb: f64,
        [18] "AST" => ast: f64,
        [19] "STL" => stl: f64,
        [20] "BLK" => blk: f64,
        [21] "TOV" => tov: f64,
        [22] "PF" => pf: f64,
        [23] "PTS" => pts: f64,
        [24] "EFF" => eff: f64,
        [25] "AST_TOV" => ast_tov: f64,
        [26] "STL_TOV" => stl_tov: f64,
    }
}

/// Decoded `leagueleaders` response
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeagueLeaders {
    pub league_leaders: Vec<LeagueLeader>,
}

impl Endpoint for LeagueLeadersRequest {
    const PATH: &'static str = "leagueleaders";
    type Output = LeagueLeaders;

    fn params(&self) -> Result<QueryParams> {
        Ok(QueryParams::new()
            .set("LeagueID", self.league_id)
            .set("PerMode", self.per_mode)
            .optional("Season", self.season.as_ref())
            .set("SeasonType", self.season_type)
            .set("StatCategory", self.stat_category)
            .optional(
                "ActiveFlag",
                self.active_flag.as_deref().filter(|flag| !flag.is_empty()),
            )
            .set("Scope", "S"))
    }

    fn decode(envelope: &StatsEnvelope) -> Self::Output {
        LeagueLeaders {
            league_leaders: decode_records(envelope, Lookup::Name("LeagueLeaders")),
        }
    }
}
