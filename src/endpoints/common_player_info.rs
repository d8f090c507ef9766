//! `commonplayerinfo`: biography and headline numbers for one player

use super::Endpoint;
use crate::decode::{decode_records, Lookup, StatsEnvelope};
use crate::error::Result;
use crate::params::{LeagueId, QueryParams};
use serde::Serialize;

/// Request for a player's profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonPlayerInfoRequest {
    pub player_id: String,
    pub league_id: Option<LeagueId>,
}

impl CommonPlayerInfoRequest {
    pub fn new(player_id: impl ToString) -> Self {
        Self {
            player_id: player_id.to_string(),
            league_id: None,
        }
    }

    #[must_use]
    pub fn league(mut self, league_id: LeagueId) -> Self {
        self.league_id = Some(league_id);
        self
    }
}

crate::stats_record! {
    /// Biographical profile
    pub struct PlayerInfo in "CommonPlayerInfo" {
        [0] "PERSON_ID" => person_id: i64,
        [1] "FIRST_NAME" => first_name: String,
        [2] "LAST_NAME" => last_name: String,
        [3] "DISPLAY_FIRST_LAST" => display_first_last: String,
        [4] "DISPLAY_LAST_COMMA_FIRST" => display_last_comma_first: String,
        [5] "DISPLAY_FI_LAST" => display_fi_last: String,
        [6] "PLAYER_SLUG" => player_slug: String,
        [7] "BIRTHDATE" => birthdate: String,
        [8] "SCHOOL" => school: String,
        [9] "COUNTRY" => country: String,
        [10] "LAST_AFFILIATION" => last_affiliation: String,
        [11] "HEIGHT" => height: String,
        [12] "WEIGHT" => weight: String,
        [13] "SEASON_EXP" => season_exp: i64,
        [14] "JERSEY" => jersey: String,
        [15] "POSITION" => position: String,
        [16] "ROSTERSTATUS" => rosterstatus: String,
        [17] "TEAM_ID" => team_id: i64,
        [18] "TEAM_NAME" => team_name: String,
        [19] "TEAM_ABBREVIATION" => team_abbreviation: String,
        [20] "TEAM_CODE" => team_code: String,
        [21] "TEAM_CITY" => team_city: String,
        [22] "PLAYERCODE" => playercode: String,
        [23] "FROM_YEAR" => from_year: String,
        [24] "TO_YEAR" => to_year: String,
        [25] "DLEAGUE_FLAG" => dleague_flag: String,
        [26] "NBA_FLAG" => nba_flag: String,
        [27] "GAMES_PLAYED_FLAG" => games_played_flag: String,
        [28] "DRAFT_YEAR" => draft_year: String,
        [29] "DRAFT_ROUND" => draft_round: String,
        [30] "DRAFT_NUMBER" => draft_number: String,
    }
}

crate::stats_record! {
    /// Per-game averages for the headline time frame
    pub struct PlayerHeadlineStats in "PlayerHeadlineStats" {
        [0] "PLAYER_ID" => player_id: i64,
        [1] "PLAYER_NAME" => player_name: String,
        [2] "TimeFrame" => time_frame: String,
        [3] "PTS" => pts: f64,
        [4] "AST" => ast: f64,
        [5] "REB" => reb: f64,
        [6] "PIE" => pie: f64,
    }
}

crate::stats_record! {
    /// A season the player has data for
    pub struct AvailableSeason in "AvailableSeasons" {
        [0] "SEASON_ID" => season_id: String,
    }
}

/// Decoded `commonplayerinfo` response
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommonPlayerInfo {
    pub common_player_info: Vec<PlayerInfo>,
    pub player_headline_stats: Vec<PlayerHeadlineStats>,
    pub available_seasons: Vec<AvailableSeason>,
}

impl Endpoint for CommonPlayerInfoRequest {
    const PATH: &'static str = "commonplayerinfo";
    type Output = CommonPlayerInfo;

    fn params(&self) -> Result<QueryParams> {
        Ok(QueryParams::new()
            .required("PlayerID", &self.player_id)?
            .optional("LeagueID", self.league_id))
    }

    fn decode(envelope: &StatsEnvelope) -> Self::Output {
        CommonPlayerInfo {
            common_player_info: decode_records(envelope, Lookup::Name("CommonPlayerInfo")),
            player_headline_stats: decode_records(envelope, Lookup::Name("PlayerHeadlineStats")),
            available_seasons: decode_records(envelope, Lookup::Name("AvailableSeasons")),
        }
    }
}
