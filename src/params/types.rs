//! Typed request parameter values
//!
//! Each type renders to the exact string the stats API expects and parses
//! case-insensitively from either that string or a short alias.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Implements `as_str`, `Display` and `FromStr` for a parameter enum
macro_rules! api_param {
    ($ty:ident, $field:literal, { $( $variant:ident => $api:literal $(| $alias:literal)* ),* $(,)? }) => {
        impl $ty {
            /// All values, in declaration order
            pub const ALL: &'static [$ty] = &[$($ty::$variant),*];

            /// The value sent on the wire
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $api,)*
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let needle = s.trim();
                $(
                    if needle.eq_ignore_ascii_case($api) $(|| needle.eq_ignore_ascii_case($alias))* {
                        return Ok($ty::$variant);
                    }
                )*
                let expected: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                Err(Error::invalid(
                    $field,
                    format!("'{s}' (expected one of: {})", expected.join(", ")),
                ))
            }
        }
    };
}

// ============================================================================
// League
// ============================================================================

/// League identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LeagueId {
    #[default]
    #[serde(rename = "00")]
    Nba,
    #[serde(rename = "01")]
    Aba,
    #[serde(rename = "20")]
    GLeague,
}

api_param!(LeagueId, "LeagueID", {
    Nba => "00" | "nba",
    Aba => "01" | "aba",
    GLeague => "20" | "gleague" | "g-league",
});

// ============================================================================
// Per Mode
// ============================================================================

/// Aggregation mode for counting stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PerMode {
    #[default]
    Totals,
    PerGame,
    Per36,
    PerMinute,
    Per48,
    Per40,
    PerPossession,
    Per100Plays,
    Per100Possessions,
}

api_param!(PerMode, "PerMode", {
    Totals => "Totals",
    PerGame => "PerGame" | "per-game",
    Per36 => "Per36",
    PerMinute => "PerMinute",
    Per48 => "Per48",
    Per40 => "Per40",
    PerPossession => "PerPossession",
    Per100Plays => "Per100Plays",
    Per100Possessions => "Per100Possessions",
});

// ============================================================================
// Season Type
// ============================================================================

/// Portion of the season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeasonType {
    #[default]
    #[serde(rename = "Regular Season")]
    Regular,
    Playoffs,
    #[serde(rename = "All Star")]
    AllStar,
    #[serde(rename = "Pre Season")]
    Preseason,
}

api_param!(SeasonType, "SeasonType", {
    Regular => "Regular Season" | "regular",
    Playoffs => "Playoffs",
    AllStar => "All Star" | "all-star",
    Preseason => "Pre Season" | "preseason",
});

// ============================================================================
// Stat Category
// ============================================================================

/// Leaderboard ranking stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatCategory {
    #[default]
    #[serde(rename = "PTS")]
    Points,
    #[serde(rename = "REB")]
    Rebounds,
    #[serde(rename = "AST")]
    Assists,
    #[serde(rename = "BLK")]
    Blocks,
    #[serde(rename = "STL")]
    Steals,
    #[serde(rename = "TOV")]
    Turnovers,
    FgPct,
    Fg3Pct,
    FtPct,
}

api_param!(StatCategory, "StatCategory", {
    Points => "PTS" | "points",
    Rebounds => "REB" | "rebounds",
    Assists => "AST" | "assists",
    Blocks => "BLK" | "blocks",
    Steals => "STL" | "steals",
    Turnovers => "TOV" | "turnovers",
    FgPct => "FG_PCT",
    Fg3Pct => "FG3_PCT",
    FtPct => "FT_PCT",
});

// ============================================================================
// Measure Type
// ============================================================================

/// Dashboard measure family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeasureType {
    #[default]
    Base,
    Advanced,
    Misc,
    Scoring,
    Usage,
}

api_param!(MeasureType, "MeasureType", {
    Base => "Base",
    Advanced => "Advanced",
    Misc => "Misc",
    Scoring => "Scoring",
    Usage => "Usage",
});

// ============================================================================
// Player Or Team
// ============================================================================

/// Subject of a league-wide query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerOrTeam {
    Player,
    Team,
}

api_param!(PlayerOrTeam, "PlayerOrTeam", {
    Player => "Player" | "P",
    Team => "Team" | "T",
});

// ============================================================================
// Season
// ============================================================================

/// `YYYY-YY`, capturing both years
static SEASON_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})$").unwrap());

/// A season in `YYYY-YY` form, e.g. `2023-24`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Season(String);

impl Season {
    /// Season starting in `start_year`
    pub fn new(start_year: i32) -> Self {
        Self(format!("{start_year}-{:02}", (start_year + 1).rem_euclid(100)))
    }

    /// Season in progress on `date`; seasons roll over in October
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= 10 {
            Self::new(date.year())
        } else {
            Self::new(date.year() - 1)
        }
    }

    /// Season in progress today (local time)
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// Calendar year the season starts in
    pub fn start_year(&self) -> i32 {
        self.0
            .split('-')
            .next()
            .and_then(|year| year.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let caps = SEASON_PATTERN
            .captures(s)
            .ok_or_else(|| Error::invalid("Season", format!("'{s}' (expected YYYY-YY)")))?;
        let start: i32 = caps[1].parse().unwrap_or_default();
        let end: i32 = caps[2].parse().unwrap_or_default();
        if (start + 1).rem_euclid(100) != end {
            return Err(Error::invalid(
                "Season",
                format!("'{s}' does not span consecutive years"),
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Season {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.0
    }
}

// ============================================================================
// Dates
// ============================================================================

/// Date formats accepted by endpoints taking a game date
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Check that `value` is a date the API understands
pub fn validate_date(field: &str, value: &str) -> Result<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value.trim(), fmt).ok())
        .ok_or_else(|| {
            Error::invalid(field, format!("'{value}' (expected YYYY-MM-DD or MM/DD/YYYY)"))
        })
}
