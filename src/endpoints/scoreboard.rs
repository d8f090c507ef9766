//! `scoreboardv2`: games and standings for one day

use super::Endpoint;
use crate::decode::{decode_records, Lookup, StatsEnvelope};
use crate::error::Result;
use crate::params::{validate_date, LeagueId, QueryParams};
use serde::Serialize;

/// Request for the scoreboard of a given date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreboardRequest {
    /// `YYYY-MM-DD` or `MM/DD/YYYY`
    pub game_date: String,
    pub league_id: Option<LeagueId>,
    pub day_offset: Option<i32>,
}

impl ScoreboardRequest {
    pub fn new(game_date: impl Into<String>) -> Self {
        Self {
            game_date: game_date.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn league(mut self, league_id: LeagueId) -> Self {
        self.league_id = Some(league_id);
        self
    }

    #[must_use]
    pub fn day_offset(mut self, offset: i32) -> Self {
        self.day_offset = Some(offset);
        self
    }
}

crate::stats_record! {
    /// One scheduled or finished game
    pub struct GameHeader in "GameHeader" {
        [0] "GAME_DATE_EST" => game_date_est: String,
        [1] "GAME_SEQUENCE" => game_sequence: i64,
        [2] "GAME_ID" => game_id: String,
        [3] "GAME_STATUS_ID" => game_status_id: String,
        [4] "GAME_STATUS_TEXT" => game_status_text: String,
        [5] "GAMECODE" => gamecode: String,
        [6] "HOME_TEAM_ID" => home_team_id: i64,
        [7] "VISITOR_TEAM_ID" => visitor_team_id: i64,
        [8] "SEASON" => season: String,
        [9] "LIVE_PERIOD" => live_period: i64,
        [10] "LIVE_PC_TIME" => live_pc_time: String,
        [11] "NATL_TV_BROADCASTER_ABBREVIATION" => natl_tv_broadcaster_abbreviation: String,
        [12] "LIVE_PERIOD_TIME_BCAST" => live_period_time_bcast: f64,
        [13] "WH_STATUS" => wh_status: String,
    }
}

crate::stats_record! {
    /// Per-team scoring by period
    pub struct LineScore in "LineScore" {
        [0] "GAME_DATE_EST" => game_date_est: String,
        [1] "GAME_SEQUENCE" => game_sequence: i64,
        [2] "GAME_ID" => game_id: String,
        [3] "TEAM_ID" => team_id: i64,
        [4] "TEAM_ABBREVIATION" => team_abbreviation: String,
        [5] "TEAM_CITY_NAME" => team_city_name: String,
        [6] "TEAM_WINS_LOSSES" => team_wins_losses: String,
        [7] "PTS_QTR1" => pts_qtr1: f64,
        [8] "PTS_QTR2" => pts_qtr2: f64,
        [9] "PTS_QTR3" => pts_qtr3: f64,
        [10] "PTS_QTR4" => pts_qtr4: f64,
        [11] "PTS_OT1" => pts_ot1: f64,
        [12] "PTS_OT2" => pts_ot2: f64,
        [13] "PTS_OT3" => pts_ot3: f64,
        [14] "PTS_OT4" => pts_ot4: f64,
        [15] "PTS_OT5" => pts_ot5: f64,
        [16] "PTS_OT6" => pts_ot6: f64,
        [17] "PTS_OT7" => pts_ot7: f64,
        [18] "PTS_OT8" => pts_ot8: f64,
        [19] "PTS_OT9" => pts_ot9: f64,
        [20] "PTS_OT10" => pts_ot10: f64,
        [21] "PTS" => pts: f64,
        [22] "FG_PCT" => fg_pct: f64,
        [23] "FT_PCT" => ft_pct: f64,
        [24] "FG3_PCT" => fg3_pct: f64,
        [25] "AST" => ast: f64,
        [26] "REB" => reb: f64,
        [27] "TOV" => tov: f64,
    }
}

crate::stats_record! {
    /// Season or playoff series record between the two teams
    pub struct SeriesStandings in "SeriesStandings" {
        [0] "GAME_ID" => game_id: String,
        [1] "HOME_TEAM_ID" => home_team_id: i64,
        [2] "VISITOR_TEAM_ID" => visitor_team_id: i64,
        [3] "GAME_DATE_EST" => game_date_est: String,
        [4] "HOME_TEAM_WINS" => home_team_wins: String,
        [5] "HOME_TEAM_LOSSES" => home_team_losses: String,
        [6] "SERIES_LEADER" => series_leader: String,
    }
}

crate::stats_record! {
    /// Previous meeting of the two teams
    pub struct LastMeeting in "LastMeeting" {
        [0] "GAME_ID" => game_id: String,
        [1] "LAST_GAME_ID" => last_game_id: String,
        [2] "LAST_GAME_DATE_EST" => last_game_date_est: String,
        [3] "LAST_GAME_HOME_TEAM_ID" => last_game_home_team_id: i64,
        [4] "LAST_GAME_HOME_TEAM_CITY" => last_game_home_team_city: String,
        [5] "LAST_GAME_HOME_TEAM_NAME" => last_game_home_team_name: String,
        [6] "LAST_GAME_HOME_TEAM_ABBREVIATION" => last_game_home_team_abbreviation: String,
        [7] "LAST_GAME_HOME_TEAM_POINTS" => last_game_home_team_points: f64,
        [8] "LAST_GAME_VISITOR_TEAM_ID" => last_game_visitor_team_id: i64,
        [9] "LAST_GAME_VISITOR_TEAM_CITY" => last_game_visitor_team_city: String,
        [10] "LAST_GAME_VISITOR_TEAM_NAME" => last_game_visitor_team_name: String,
        [11] "LAST_GAME_VISITOR_TEAM_ABBREVIATION" => last_game_visitor_team_abbreviation: String,
        [12] "LAST_GAME_VISITOR_TEAM_POINTS" => last_game_visitor_team_points: f64,
    }
}

crate::stats_record! {
    /// Eastern conference standings as of the date
    pub struct EastConfStandingsByDay in "EastConfStandingsByDay" {
        [0] "TEAM_ID" => team_id: i64,
        [1] "LEAGUE_ID" => league_id: String,
        [2] "SEASON_ID" => season_id: String,
        [3] "STANDINGSDATE" => standingsdate: String,
        [4] "CONFERENCE" => conference: String,
        [5] "TEAM" => team: String,
        [6] "G" => games: String,
        [7] "W" => wins: String,
        [8] "L" => losses: String,
        [9] "W_PCT" => w_pct: f64,
        [10] "HOME_RECORD" => home_record: String,
        [11] "ROAD_RECORD" => road_record: String,
    }
}

crate::stats_record! {
    /// Western conference standings as of the date
    pub struct WestConfStandingsByDay in "WestConfStandingsByDay" {
        [0] "TEAM_ID" => team_id: i64,
        [1] "LEAGUE_ID" => league_id: String,
        [2] "SEASON_ID" => season_id: String,
        [3] "STANDINGSDATE" => standingsdate: String,
        [4] "CONFERENCE" => conference: String,
        [5] "TEAM" => team: String,
        [6] "G" => games: String,
        [7] "W" => wins: String,
        [8] "L" => losses: String,
        [9] "W_PCT" => w_pct: f64,
        [10] "HOME_RECORD" => home_record: String,
        [11] "ROAD_RECORD" => road_record: String,
    }
}

crate::stats_record! {
    /// Tracking data availability per game
    pub struct Available in "Available" {
        [0] "GAME_ID" => game_id: String,
        [1] "PT_AVAILABLE" => pt_available: String,
    }
}

/// Decoded `scoreboardv2` response
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scoreboard {
    pub game_header: Vec<GameHeader>,
    pub line_score: Vec<LineScore>,
    pub series_standings: Vec<SeriesStandings>,
    pub last_meeting: Vec<LastMeeting>,
    pub east_conf_standings_by_day: Vec<EastConfStandingsByDay>,
    pub west_conf_standings_by_day: Vec<WestConfStandingsByDay>,
    pub available: Vec<Available>,
}

impl Endpoint for ScoreboardRequest {
    const PATH: &'static str = "scoreboardv2";
    type Output = Scoreboard;

    fn params(&self) -> Result<QueryParams> {
        let params = QueryParams::new().required("GameDate", &self.game_date)?;
        validate_date("GameDate", &self.game_date)?;
        Ok(params
            .optional("LeagueID", self.league_id)
            .optional("DayOffset", self.day_offset))
    }

    fn decode(envelope: &StatsEnvelope) -> Self::Output {
        Scoreboard {
            game_header: decode_records(envelope, Lookup::NameOrIndex("GameHeader", 0)),
            line_score: decode_records(envelope, Lookup::NameOrIndex("LineScore", 1)),
            series_standings: decode_records(envelope, Lookup::NameOrIndex("SeriesStandings", 2)),
            last_meeting: decode_records(envelope, Lookup::NameOrIndex("LastMeeting", 3)),
            east_conf_standings_by_day: decode_records(
                envelope,
                Lookup::NameOrIndex("EastConfStandingsByDay", 4),
            ),
            west_conf_standings_by_day: decode_records(
                envelope,
                Lookup::NameOrIndex("WestConfStandingsByDay", 5),
            ),
            available: decode_records(envelope, Lookup::NameOrIndex("Available", 6)),
        }
    }
}
