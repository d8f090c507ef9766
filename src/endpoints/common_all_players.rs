//! `commonallplayers`: every player registered in a season

use super::Endpoint;
use crate::decode::{decode_records, Lookup, StatsEnvelope};
use crate::error::Result;
use crate::params::{LeagueId, QueryParams, Season};
use serde::Serialize;

/// Request for the player index of a season
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonAllPlayersRequest {
    pub season: Season,
    pub league_id: Option<LeagueId>,
    /// Only players on a roster this season
    pub only_current_season: Option<bool>,
}

impl CommonAllPlayersRequest {
    pub fn new(season: Season) -> Self {
        Self {
            season,
            league_id: None,
            only_current_season: None,
        }
    }

    #[must_use]
    pub fn league(mut self, league_id: LeagueId) -> Self {
        self.league_id = Some(league_id);
        self
    }

    #[must_use]
    pub fn only_current_season(mut self, only: bool) -> Self {
        self.only_current_season = Some(only);
        self
    }
}

crate::stats_record! {
    /// Index entry for one player
    pub struct CommonAllPlayer in "CommonAllPlayers" {
        [0] "PERSON_ID" => person_id: i64,
        [1] "DISPLAY_LAST_COMMA_FIRST" => display_last_comma_first: String,
        [2] "DISPLAY_FIRST_LAST" => display_first_last: String,
        [3] "ROSTERSTATUS" => rosterstatus: String,
        [4] "FROM_YEAR" => from_year: String,
        [5] "TO_YEAR" => to_year: String,
        [6] "PLAYERCODE" => playercode: String,
        [7] "TEAM_ID" => team_id: i64,
        [8] "TEAM_CITY" => team_city: String,
        [9] "TEAM_NAME" => team_name: String,
        [10] "TEAM_ABBREVIATION" => team_abbreviation: String,
        [11] "TEAM_CODE" => team_code: String,
        [12] "GAMES_PLAYED_FLAG" => games_played_flag: String,
        [13] "OTHERLEAGUE_EXPERIENCE_CH" => otherleague_experience_ch: String,
    }
}

/// Decoded `commonallplayers` response
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommonAllPlayers {
    pub common_all_players: Vec<CommonAllPlayer>,
}

impl Endpoint for CommonAllPlayersRequest {
    const PATH: &'static str = "commonallplayers";
    type Output = CommonAllPlayers;

    fn params(&self) -> Result<QueryParams> {
        Ok(QueryParams::new()
            .required("Season", self.season.as_str())?
            .optional("LeagueID", self.league_id)
            .optional(
                "IsOnlyCurrentSeason",
                self.only_current_season.map(u8::from),
            ))
    }

    fn decode(envelope: &StatsEnvelope) -> Self::Output {
        CommonAllPlayers {
            common_all_players: decode_records(
                envelope,
                Lookup::NameOrIndex("CommonAllPlayers", 0),
            ),
        }
    }
}
