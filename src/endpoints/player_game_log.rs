//! `playergamelog`: one player's games in a season

use super::Endpoint;
use crate::decode::{decode_records, Lookup, StatsEnvelope};
use crate::error::Result;
use crate::params::{validate_date, LeagueId, QueryParams, Season, SeasonType};
use serde::Serialize;

/// Request for a player's game log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerGameLogRequest {
    pub player_id: String,
    pub season: Option<Season>,
    pub season_type: SeasonType,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub league_id: Option<LeagueId>,
}

impl PlayerGameLogRequest {
    pub fn new(player_id: impl ToString) -> Self {
        Self {
            player_id: player_id.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    #[must_use]
    pub fn season_type(mut self, season_type: SeasonType) -> Self {
        self.season_type = season_type;
        self
    }

    /// Limit to games between two dates, inclusive
    #[must_use]
    pub fn between(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.date_from = Some(from.into());
        self.date_to = Some(to.into());
        self
    }

    #[must_use]
    pub fn league(mut self, league_id: LeagueId) -> Self {
        self.league_id = Some(league_id);
        self
    }
}

crate::stats_record! {
    /// One game played
    pub struct GameLogEntry in "PlayerGameLog" {
        [0] "SEASON_ID" => season_id: String,
        [1] "Player_ID" => player_id: i64,
        [2] "Game_ID" => game_id: String,
        [3] "GAME_DATE" => game_date: String,
        [4] "MATCHUP" => matchup: String,
        [5] "WL" => win_loss: String,
        [6] "MIN" => minutes: i64,
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
        [22] "TOV" => tov: i64,
        [23] "PF" => pf: i64,
        [24] "PTS" => pts: i64,
        [25] "PLUS_MINUS" => plus_minus: i64,
        [26] "VIDEO_AVAILABLE" => video_available: i64,
    }
}

/// Decoded `playergamelog` response
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerGameLog {
    pub player_game_log: Vec<GameLogEntry>,
}

impl Endpoint for PlayerGameLogRequest {
    const PATH: &'static str = "playergamelog";
    type Output = PlayerGameLog;

    fn params(&self) -> Result<QueryParams> {
        let date_from = self.date_from.as_deref().filter(|d| !d.is_empty());
        let date_to = self.date_to.as_deref().filter(|d| !d.is_empty());
        for (field, date) in [("DateFrom", date_from), ("DateTo", date_to)] {
            if let Some(date) = date {
                validate_date(field, date)?;
            }
        }

        Ok(QueryParams::new()
            .required("PlayerID", &self.player_id)?
            .optional("Season", self.season.as_ref())
            .set("SeasonType", self.season_type)
            .optional("DateFrom", date_from)
            .optional("DateTo", date_to)
            .optional("LeagueID", self.league_id))
    }

    fn decode(envelope: &StatsEnvelope) -> Self::Output {
        PlayerGameLog {
            player_game_log: decode_records(envelope, Lookup::Name("PlayerGameLog")),
        }
    }
}
