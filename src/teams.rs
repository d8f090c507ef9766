//! Static franchise directory
//!
//! Lookups over the 30 current franchises without a network call. Team IDs
//! match the `TEAM_ID` column of every endpoint.

use serde::Serialize;

/// One franchise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Team {
    pub id: i64,
    pub full_name: &'static str,
    pub abbreviation: &'static str,
    pub nickname: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub year_founded: u16,
}

const fn team(
    id: i64,
    full_name: &'static str,
    abbreviation: &'static str,
    nickname: &'static str,
    city: &'static str,
    state: &'static str,
    year_founded: u16,
) -> Team {
    Team {
        id,
        full_name,
        abbreviation,
        nickname,
        city,
        state,
        year_founded,
    }
}

static TEAMS: [Team; 30] = [
    team(1610612737, "Atlanta Hawks", "ATL", "Hawks", "Atlanta", "Georgia", 1949),
    team(1610612738, "Boston Celtics", "BOS", "Celtics", "Boston", "Massachusetts", 1946),
    team(1610612739, "Cleveland Cavaliers", "CLE", "Cavaliers", "Cleveland", "Ohio", 1970),
    team(1610612740, "New Orleans Pelicans", "NOP", "Pelicans", "New Orleans", "Louisiana", 2002),
    team(1610612741, "Chicago Bulls", "CHI", "Bulls", "Chicago", "Illinois", 1966),
    team(1610612742, "Dallas Mavericks", "DAL", "Mavericks", "Dallas", "Texas", 1980),
    team(1610612743, "Denver Nuggets", "DEN", "Nuggets", "Denver", "Colorado", 1976),
    team(1610612744, "Golden State Warriors", "GSW", "Warriors", "Golden State", "California", 1946),
    team(1610612745, "Houston Rockets", "HOU", "Rockets", "Houston", "Texas", 1967),
    team(1610612746, "Los Angeles Clippers", "LAC", "Clippers", "Los Angeles", "California", 1970),
    team(1610612747, "Los Angeles Lakers", "LAL", "Lakers", "Los Angeles", "California", 1948),
    team(1610612748, "Miami Heat", "MIA", "Heat", "Miami", "Florida", 1988),
    team(1610612749, "Milwaukee Bucks", "MIL", "Bucks", "Milwaukee", "Wisconsin", 1968),
    team(1610612750, "Minnesota Timberwolves", "MIN", "Timberwolves", "Minneapolis", "Minnesota", 1989),
    team(1610612751, "Brooklyn Nets", "BKN", "Nets", "Brooklyn", "New York", 1976),
    team(1610612752, "New York Knicks", "NYK", "Knicks", "New York", "New York", 1946),
    team(1610612753, "Orlando Magic", "ORL", "Magic", "Orlando", "Florida", 1989),
    team(1610612754, "Indiana Pacers", "IND", "Pacers", "Indiana", "Indiana", 1976),
    team(1610612755, "Philadelphia 76ers", "PHI", "76ers", "Philadelphia", "Pennsylvania", 1949),
    team(1610612756, "Phoenix Suns", "PHX", "Suns", "Phoenix", "Arizona", 1968),
    team(1610612757, "Portland Trail Blazers", "POR", "Trail Blazers", "Portland", "Oregon", 1970),
    team(1610612758, "Sacramento Kings", "SAC", "Kings", "Sacramento", "California", 1948),
    team(1610612759, "San Antonio Spurs", "SAS", "Spurs", "San Antonio", "Texas", 1976),
    team(1610612760, "Oklahoma City Thunder", "OKC", "Thunder", "Oklahoma City", "Oklahoma", 1967),
    team(1610612761, "Toronto Raptors", "TOR", "Raptors", "Toronto", "Ontario", 1995),
    team(1610612762, "Utah Jazz", "UTA", "Jazz", "Utah", "Utah", 1974),
    team(1610612763, "Memphis Grizzlies", "MEM", "Grizzlies", "Memphis", "Tennessee", 1995),
    team(1610612764, "Washington Wizards", "WAS", "Wizards", "Washington", "District of Columbia", 1961),
    team(1610612765, "Detroit Pistons", "DET", "Pistons", "Detroit", "Michigan", 1948),
    team(1610612766, "Charlotte Hornets", "CHA", "Hornets", "Charlotte", "North Carolina", 1988),
];

/// Every franchise, ordered by ID
pub fn all() -> &'static [Team] {
    &TEAMS
}

pub fn find_by_id(id: i64) -> Option<&'static Team> {
    TEAMS.iter().find(|team| team.id == id)
}

/// Case-insensitive exact match on the three-letter code
pub fn find_by_abbreviation(abbreviation: &str) -> Option<&'static Team> {
    let abbreviation = abbreviation.trim();
    TEAMS
        .iter()
        .find(|team| team.abbreviation.eq_ignore_ascii_case(abbreviation))
}

/// Teams whose nickname contains `nickname`, ignoring case
pub fn find_by_nickname(nickname: &str) -> Vec<&'static Team> {
    let needle = nickname.to_lowercase();
    TEAMS
        .iter()
        .filter(|team| team.nickname.to_lowercase().contains(&needle))
        .collect()
}

/// Teams whose full name, nickname, abbreviation or city contains `query`
pub fn search(query: &str) -> Vec<&'static Team> {
    let needle = query.to_lowercase();
    TEAMS
        .iter()
        .filter(|team| {
            [team.full_name, team.nickname, team.abbreviation, team.city]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test]
    fn test_table_is_complete_and_unique() {
        assert_eq!(all().len(), 30);
        let ids: HashSet<i64> = all().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 30);
        let abbreviations: HashSet<&str> = all().iter().map(|t| t.abbreviation).collect();
        assert_eq!(abbreviations.len(), 30);
        assert!(all().windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_find_by_id() {
        let team = find_by_id(1610612743).unwrap();
        assert_eq!(team.full_name, "Denver Nuggets");
        assert_eq!(team.state, "Colorado");
        assert_eq!(team.year_founded, 1976);
        assert!(find_by_id(42).is_none());
    }

    #[test_case("LAL", "Los Angeles Lakers")]
    #[test_case("lal", "Los Angeles Lakers")]
    #[test_case(" bkn ", "Brooklyn Nets")]
    fn test_find_by_abbreviation(input: &str, expected: &str) {
        assert_eq!(find_by_abbreviation(input).unwrap().full_name, expected);
    }

    #[test]
    fn test_find_by_abbreviation_missing() {
        assert!(find_by_abbreviation("XYZ").is_none());
        assert!(find_by_abbreviation("").is_none());
    }

    #[test]
    fn test_find_by_nickname_substring() {
        let names: Vec<&str> = find_by_nickname("ers")
            .iter()
            .map(|t| t.abbreviation)
            .collect();
        assert_eq!(names, vec!["CLE", "LAC", "LAL", "IND", "PHI", "POR"]);
        assert!(find_by_nickname("Sonics").is_empty());
    }

    #[test]
    fn test_search_across_fields() {
        let la: Vec<&str> = search("los angeles")
            .iter()
            .map(|t| t.abbreviation)
            .collect();
        assert_eq!(la, vec!["LAC", "LAL"]);

        let by_code: Vec<&str> = search("okc").iter().map(|t| t.abbreviation).collect();
        assert_eq!(by_code, vec!["OKC"]);

        assert_eq!(search("").len(), 30);
    }
}
