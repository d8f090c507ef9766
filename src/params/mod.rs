//! Request parameters
//!
//! Typed values for the API's enumerated query parameters and the
//! [`QueryParams`] builder used by every endpoint.

mod query;
mod types;

pub use query::QueryParams;
pub use types::{
    validate_date, LeagueId, MeasureType, PerMode, PlayerOrTeam, Season, SeasonType, StatCategory,
};

#[cfg(test)]
mod tests;
