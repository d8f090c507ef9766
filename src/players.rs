//! Player directory
//!
//! Name lookups over a player index fetched from `commonallplayers`. All
//! matching ignores case and diacritics, so `"jokic"` finds `"Nikola Jokić"`.

use crate::endpoints::{CommonAllPlayer, CommonAllPlayers};
use crate::error::{Error, Result};
use regex::RegexBuilder;
use serde::Serialize;
use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// One player of the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub is_active: bool,
}

impl From<&CommonAllPlayer> for Player {
    fn from(record: &CommonAllPlayer) -> Self {
        // "Last, First"; single-name players carry no comma
        let (last_name, first_name) = match record.display_last_comma_first.split_once(',') {
            Some((last, first)) => (last.trim().to_string(), first.trim().to_string()),
            None => (record.display_last_comma_first.trim().to_string(), String::new()),
        };
        Self {
            id: record.person_id,
            first_name,
            last_name,
            full_name: record.display_first_last.clone(),
            is_active: record.rosterstatus == "1",
        }
    }
}

/// Searchable set of players, kept in index order
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: Vec<Player>,
    by_id: HashMap<i64, usize>,
}

impl PlayerDirectory {
    pub fn new(players: Vec<Player>) -> Self {
        let by_id = players
            .iter()
            .enumerate()
            .map(|(position, player)| (player.id, position))
            .collect();
        Self { players, by_id }
    }

    pub fn all(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn active(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_active).collect()
    }

    pub fn inactive(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.is_active).collect()
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Player> {
        self.by_id.get(&id).map(|&position| &self.players[position])
    }

    /// Players whose full name matches the regular expression `pattern`
    pub fn find_by_full_name(&self, pattern: &str) -> Result<Vec<&Player>> {
        self.find_matching(pattern, |p| p.full_name.as_str())
    }

    /// Players whose first name matches the regular expression `pattern`
    pub fn find_by_first_name(&self, pattern: &str) -> Result<Vec<&Player>> {
        self.find_matching(pattern, |p| p.first_name.as_str())
    }

    /// Players whose last name matches the regular expression `pattern`
    pub fn find_by_last_name(&self, pattern: &str) -> Result<Vec<&Player>> {
        self.find_matching(pattern, |p| p.last_name.as_str())
    }

    /// Players whose full, first or last name contains `query`
    pub fn search(&self, query: &str) -> Vec<&Player> {
        let needle = fold(query);
        self.players
            .iter()
            .filter(|player| {
                [&player.full_name, &player.first_name, &player.last_name]
                    .iter()
                    .any(|name| fold(name).contains(&needle))
            })
            .collect()
    }

    fn find_matching<F>(&self, pattern: &str, field: F) -> Result<Vec<&Player>>
    where
        F: Fn(&Player) -> &str,
    {
        let regex = RegexBuilder::new(&strip_accents(pattern))
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::invalid("pattern", e.to_string()))?;
        Ok(self
            .players
            .iter()
            .filter(|player| regex.is_match(&strip_accents(field(*player))))
            .collect())
    }
}

impl From<&CommonAllPlayers> for PlayerDirectory {
    fn from(response: &CommonAllPlayers) -> Self {
        Self::new(response.common_all_players.iter().map(Player::from).collect())
    }
}

impl FromIterator<Player> for PlayerDirectory {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Remove combining marks: decompose, drop marks, recompose
pub fn strip_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

fn fold(s: &str) -> String {
    strip_accents(s).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn player(id: i64, first: &str, last: &str, active: bool) -> Player {
        Player {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            full_name: format!("{first} {last}"),
            is_active: active,
        }
    }

    fn directory() -> PlayerDirectory {
        [
            player(203_999, "Nikola", "Jokić", true),
            player(2544, "LeBron", "James", true),
            player(203_507, "Giannis", "Antetokounmpo", true),
            player(893, "Michael", "Jordan", false),
            player(1_628_983, "Shai", "Gilgeous-Alexander", true),
            player(201_566, "Russell", "Westbrook", true),
        ]
        .into_iter()
        .collect()
    }

    fn ids(players: &[&Player]) -> Vec<i64> {
        players.iter().map(|p| p.id).collect()
    }

    #[test_case("Jokić" => "Jokic" ; "acute")]
    #[test_case("Dončić" => "Doncic" ; "caron")]
    #[test_case("Nenê" => "Nene" ; "circumflex")]
    #[test_case("Šarūnas Jasikevičius" => "Sarunas Jasikevicius" ; "macron and caron")]
    #[test_case("Ömer" => "Omer" ; "umlaut")]
    #[test_case("James" => "James" ; "ascii untouched")]
    fn test_strip_accents(input: &str) -> String {
        strip_accents(input)
    }

    #[test]
    fn test_search_ignores_accents_and_case() {
        let directory = directory();
        assert_eq!(ids(&directory.search("jokic")), vec![203_999]);
        assert_eq!(ids(&directory.search("JOKIĆ")), vec![203_999]);
        assert_eq!(ids(&directory.search("nikola jok")), vec![203_999]);
        assert!(directory.search("zzz").is_empty());
    }

    #[test]
    fn test_search_covers_first_and_last_names() {
        let directory = directory();
        assert_eq!(ids(&directory.search("russ")), vec![201_566]);
        assert_eq!(ids(&directory.search("gilgeous")), vec![1_628_983]);
        assert_eq!(directory.search("j").len(), 3);
    }

    #[test]
    fn test_find_by_full_name_is_a_pattern() {
        let directory = directory();
        assert_eq!(ids(&directory.find_by_full_name("^lebron").unwrap()), vec![2544]);
        assert_eq!(
            ids(&directory.find_by_full_name("Jokic$").unwrap()),
            vec![203_999]
        );
        assert_eq!(
            ids(&directory.find_by_last_name("^j").unwrap()),
            vec![203_999, 2544, 893]
        );
        assert_eq!(ids(&directory.find_by_first_name("^shai$").unwrap()), vec![1_628_983]);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let err = directory().find_by_full_name("(unclosed").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_find_by_id_and_activity() {
        let directory = directory();
        assert_eq!(directory.len(), 6);
        assert_eq!(directory.find_by_id(893).unwrap().last_name, "Jordan");
        assert!(directory.find_by_id(1).is_none());
        assert_eq!(directory.active().len(), 5);
        assert_eq!(ids(&directory.inactive()), vec![893]);
    }

    #[test]
    fn test_player_from_index_record() {
        let record = CommonAllPlayer {
            person_id: 203_999,
            display_last_comma_first: "Jokić, Nikola".into(),
            display_first_last: "Nikola Jokić".into(),
            rosterstatus: "1".into(),
            ..CommonAllPlayer::default()
        };
        let player = Player::from(&record);
        assert_eq!(player.first_name, "Nikola");
        assert_eq!(player.last_name, "Jokić");
        assert_eq!(player.full_name, "Nikola Jokić");
        assert!(player.is_active);

        let single = CommonAllPlayer {
            person_id: 1,
            display_last_comma_first: "Nenê".into(),
            display_first_last: "Nenê".into(),
            rosterstatus: "0".into(),
            ..CommonAllPlayer::default()
        };
        let player = Player::from(&single);
        assert_eq!(player.last_name, "Nenê");
        assert_eq!(player.first_name, "");
        assert!(!player.is_active);
    }
}
