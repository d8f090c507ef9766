//! `boxscoretraditionalv2`: traditional box score for one game

use super::Endpoint;
use crate::decode::{decode_records, Lookup, StatsEnvelope};
use crate::error::Result;
use crate::params::QueryParams;
use serde::Serialize;

/// Request for a game's traditional box score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxScoreTraditionalRequest {
    pub game_id: String,
    pub start_period: Option<u32>,
    pub end_period: Option<u32>,
    pub start_range: Option<u32>,
    pub end_range: Option<u32>,
    pub range_type: Option<u32>,
}

impl BoxScoreTraditionalRequest {
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            ..Self::default()
        }
    }

    /// Restrict to a span of periods
    #[must_use]
    pub fn periods(mut self, start: u32, end: u32) -> Self {
        self.start_period = Some(start);
        self.end_period = Some(end);
        self
    }

    /// Restrict to a span of game clock, in tenths of a second
    #[must_use]
    pub fn range(mut self, range_type: u32, start: u32, end: u32) -> Self {
        self.range_type = Some(range_type);
        self.start_range = Some(start);
        self.end_range = Some(end);
        self
    }
}

crate::stats_record! {
    /// Per-player line
    pub struct BoxScorePlayerStats in "PlayerStats" {
        [0] "GAME_ID" => game_id: String,
        [1] "TEAM_ID" => team_id: i64,
        [2] "TEAM_ABBREVIATION" => team_abbreviation: String,
        [3] "TEAM_CITY" => team_city: String,
        [4] "PLAYER_ID" => player_id: i64,
        [5] "PLAYER_NAME" => player_name: String,
        [6] "NICKNAME" => nickname: String,
        [7] "START_POSITION" => start_position: String,
        [8] "COMMENT" => comment: String,
        [9] "MIN" => minutes: f64,
        [10] "FGM" => fgm: i64,
        [11] "FGA" => fga: i64,
        [12] "FG_PCT" => fg_pct: f64,
        [13] "FG3M" => fg3m: i64,
        [14] "FG3A" => fg3a: i64,
        [15] "FG3_PCT" => fg3_pct: f64,
        [16] "FTM" => ftm: i64,
        [17] "FTA" => fta: i64,
        [18] "FT_PCT" => ft_pct: f64,
        [19] "OREB" => oreb: i64,
        [20] "DREB" => dreb: i64,
        [21] "REB" => reb: i64,
        [22] "AST" => ast: i64,
        [23] "STL" => stl: i64,
        [24] "BLK" => blk: i64,
        [25] "TO" => turnovers: i64,
        [26] "PF" => pf: i64,
        [27] "PTS" => pts: i64,
        [28] "PLUS_MINUS" => plus_minus: f64,
    }
}

crate::stats_record! {
    /// Per-team totals
    pub struct BoxScoreTeamStats in "TeamStats" {
        [0] "GAME_ID" => game_id: String,
        [1] "TEAM_ID" => team_id: i64,
        [2] "TEAM_NAME" => team_name: String,
        [3] "TEAM_ABBREVIATION" => team_abbreviation: String,
        [4] "TEAM_CITY" => team_city: String,
        [5] "MIN" => minutes: f64,
        [6] "FGM" => fgm: i64,
        [7] "FGA" => fga: i64,
        [8] "FG_PCT" => fg_pct: f64,
        [9] "FG3M" => fg3m: i64,
        [10] "FG3A" => fg3a: i64,
        [11] "FG3_PCT" => fg3_pct: f64,
        [12] "FTM" => ftm: i64,
        [13] "FTA" => fta: i64,
        [14] "FT_PCT" => ft_pct: f64,
        [15] "OREB" => oreb: i64,
        [16] "DREB" => dreb: i64,
        [17] "REB" => reb: i64,
        [18] "AST" => ast: i64,
        [19] "STL" => stl: i64,
        [20] "BLK" => blk: i64,
        [21] "TO" => turnovers: i64,
        [22] "PF" => pf: i64,
        [23] "PTS" => pts: i64,
        [24] "PLUS_MINUS" => plus_minus: f64,
    }
}

crate::stats_record! {
    /// Team totals split into starters and bench
    pub struct BoxScoreStarterBenchStats in "TeamStarterBenchStats" {
        [0] "GAME_ID" => game_id: String,
        [1] "TEAM_ID" => team_id: i64,
        [2] "TEAM_NAME" => team_name: String,
        [3] "TEAM_ABBREVIATION" => team_abbreviation: String,
        [4] "TEAM_CITY" => team_city: String,
        [5] "STARTERS_BENCH" => starters_bench: String,
        [6] "MIN" => minutes: f64,
        [7] "FGM" => fgm: i64,
        [8] "FGA" => fga: i64,
        [9] "FG_PCT" => fg_pct: f64,
        [10] "FG3M" => fg3m: i64,
        [11] "FG3A" => fg3a: i64,
        [12] "FG3_PCT" => fg3_pct: f64,
        [13] "FTM" => ftm: i64,
        [14] "FTA" => fta: i64,
        [15] "FT_PCT" => ft_pct: f64,
        [16] "OREB" => oreb: i64,
        [17] "DREB" => dreb: i64,
        [18] "REB" => reb: i64,
        [19] "AST" => ast: i64,
        [20] "STL" => stl: i64,
        [21] "BLK" => blk: i64,
        [22] "TO" => turnovers: i64,
        [23] "PF" => pf: i64,
        [24] "PTS" => pts: i64,
        [25] "PLUS_MINUS" => plus_minus: f64,
    }
}

/// Decoded `boxscoretraditionalv2` response
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoxScoreTraditional {
    pub player_stats: Vec<BoxScorePlayerStats>,
    pub team_stats: Vec<BoxScoreTeamStats>,
    pub team_starter_bench_stats: Vec<BoxScoreStarterBenchStats>,
}

impl Endpoint for BoxScoreTraditionalRequest {
    const PATH: &'static str = "boxscoretraditionalv2";
    type Output = BoxScoreTraditional;

    fn params(&self) -> Result<QueryParams> {
        Ok(QueryParams::new()
            .required("GameID", &self.game_id)?
            .optional("StartPeriod", self.start_period)
            .optional("EndPeriod", self.end_period)
            .optional("StartRange", self.start_range)
            .optional("EndRange", self.end_range)
            .optional("RangeType", self.range_type))
    }

    fn decode(envelope: &StatsEnvelope) -> Self::Output {
        BoxScoreTraditional {
            player_stats: decode_records(envelope, Lookup::NameOrIndex("PlayerStats", 0)),
            team_stats: decode_records(envelope, Lookup::NameOrIndex("TeamStats", 1)),
            team_starter_bench_stats: decode_records(
                envelope,
                Lookup::NameOrIndex("TeamStarterBenchStats", 2),
            ),
        }
    }
}
