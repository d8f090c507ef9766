use super::*;
use crate::error::Error;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Enumerated parameters
// ============================================================================

#[test]
fn test_defaults_match_api_defaults() {
    assert_eq!(LeagueId::default().as_str(), "00");
    assert_eq!(PerMode::default().as_str(), "Totals");
    assert_eq!(SeasonType::default().as_str(), "Regular Season");
    assert_eq!(StatCategory::default().as_str(), "PTS");
    assert_eq!(MeasureType::default().as_str(), "Base");
}

#[test_case("00", LeagueId::Nba)]
#[test_case("nba", LeagueId::Nba)]
#[test_case("01", LeagueId::Aba)]
#[test_case("20", LeagueId::GLeague)]
#[test_case("G-League", LeagueId::GLeague)]
fn test_league_id_parse(input: &str, expected: LeagueId) {
    assert_eq!(input.parse::<LeagueId>().unwrap(), expected);
}

#[test_case("regular season", SeasonType::Regular)]
#[test_case("Regular", SeasonType::Regular)]
#[test_case("playoffs", SeasonType::Playoffs)]
#[test_case("All Star", SeasonType::AllStar)]
#[test_case("preseason", SeasonType::Preseason)]
fn test_season_type_parse(input: &str, expected: SeasonType) {
    assert_eq!(input.parse::<SeasonType>().unwrap(), expected);
}

#[test]
fn test_enum_display_roundtrips_through_from_str() {
    for mode in PerMode::ALL {
        assert_eq!(mode.to_string().parse::<PerMode>().unwrap(), *mode);
    }
    for cat in StatCategory::ALL {
        assert_eq!(cat.to_string().parse::<StatCategory>().unwrap(), *cat);
    }
    for measure in MeasureType::ALL {
        assert_eq!(measure.to_string().parse::<MeasureType>().unwrap(), *measure);
    }
}

#[test]
fn test_unknown_value_is_invalid_parameter() {
    let err = "Per99".parse::<PerMode>().unwrap_err();
    match err {
        Error::InvalidParameter { field, message } => {
            assert_eq!(field, "PerMode");
            assert!(message.contains("Per99"));
            assert!(message.contains("PerGame"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_enum_serde_uses_api_strings() {
    assert_eq!(
        serde_json::to_string(&SeasonType::AllStar).unwrap(),
        "\"All Star\""
    );
    assert_eq!(
        serde_json::to_string(&StatCategory::Fg3Pct).unwrap(),
        "\"FG3_PCT\""
    );
    assert_eq!(serde_json::to_string(&LeagueId::GLeague).unwrap(), "\"20\"");
    let parsed: PlayerOrTeam = serde_json::from_str("\"Team\"").unwrap();
    assert_eq!(parsed, PlayerOrTeam::Team);
}

// ============================================================================
// Season
// ============================================================================

#[test_case(2023, "2023-24")]
#[test_case(1999, "1999-00")]
#[test_case(2009, "2009-10")]
fn test_season_new(year: i32, expected: &str) {
    let season = Season::new(year);
    assert_eq!(season.as_str(), expected);
    assert_eq!(season.start_year(), year);
}

#[test_case(2024, 10, 1, "2024-25"; "october starts a season")]
#[test_case(2024, 9, 30, "2023-24"; "september belongs to previous season")]
#[test_case(2025, 1, 15, "2024-25"; "january")]
fn test_season_containing(y: i32, m: u32, d: u32, expected: &str) {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    assert_eq!(Season::containing(date).as_str(), expected);
}

#[test]
fn test_season_current_is_well_formed() {
    let current = Season::current();
    let reparsed: Season = current.as_str().parse().unwrap();
    assert_eq!(reparsed, current);
}

#[test_case("2023-24"; "plain")]
#[test_case(" 1999-00 "; "padded century wrap")]
fn test_season_parse_valid(input: &str) {
    assert!(input.parse::<Season>().is_ok());
}

#[test_case("2023"; "missing suffix")]
#[test_case("2023-2024"; "long suffix")]
#[test_case("2023-25"; "non consecutive")]
#[test_case("23-24"; "short year")]
fn test_season_parse_invalid(input: &str) {
    let err = input.parse::<Season>().unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { ref field, .. } if field == "Season"));
}

#[test]
fn test_season_serde() {
    let season: Season = serde_json::from_str("\"2022-23\"").unwrap();
    assert_eq!(season, Season::new(2022));
    assert_eq!(serde_json::to_string(&season).unwrap(), "\"2022-23\"");
    assert!(serde_json::from_str::<Season>("\"2022\"").is_err());
}

// ============================================================================
// Dates
// ============================================================================

#[test_case("2024-01-15")]
#[test_case("01/15/2024")]
fn test_validate_date_accepts(input: &str) {
    let date = validate_date("GameDate", input).unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
}

#[test_case(""; "empty")]
#[test_case("2024-13-01"; "bad month")]
#[test_case("15.01.2024"; "wrong separator")]
fn test_validate_date_rejects(input: &str) {
    let err = validate_date("GameDate", input).unwrap_err();
    assert!(err.is_validation());
}

// ============================================================================
// QueryParams
// ============================================================================

#[test]
fn test_required_rejects_empty() {
    let err = QueryParams::new().required("GameID", "").unwrap_err();
    match err {
        Error::MissingParameter { field } => assert_eq!(field, "GameID"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_optional_none_is_omitted() {
    let params = QueryParams::new()
        .optional("StartPeriod", None::<i32>)
        .optional("EndPeriod", Some(4));
    assert!(!params.contains("StartPeriod"));
    assert_eq!(params.get("EndPeriod"), Some("4"));
    assert_eq!(params.len(), 1);
}

#[test]
fn test_iteration_is_sorted_by_name() {
    let params = QueryParams::new()
        .set("Season", Season::new(2023))
        .set("LeagueID", LeagueId::Nba)
        .required("PlayerID", "2544")
        .unwrap();
    let names: Vec<&str> = params.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["LeagueID", "PlayerID", "Season"]);
}

#[test]
fn test_set_overwrites() {
    let mut params = QueryParams::new().set("PerMode", PerMode::Totals);
    params.insert("PerMode", "PerGame");
    assert_eq!(params.get("PerMode"), Some("PerGame"));
    assert!(!params.is_empty());
}

#[test]
fn test_collect_from_pairs() {
    let params: QueryParams = vec![("b", "2"), ("a", "1")].into_iter().collect();
    let pairs: Vec<(&str, &str)> = params.iter().collect();
    assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
}
