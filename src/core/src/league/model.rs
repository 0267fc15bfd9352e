use crate::league::{LeagueStatus, Searchable};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const SEASON_NAME_PREFIX: &str = "Virtuális Labdarúgás Liga Mód Retail";
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: String,
    pub season: String,
    pub winner: String,
    pub second_place: String,
    pub third_place: String,
    pub status: LeagueStatus,
}

impl League {
    /// Fresh in-progress league with placeholder podium.
    pub fn new(id: &str) -> Self {
        League {
            id: id.to_string(),
            season: format!("{} {}", SEASON_NAME_PREFIX, id),
            winner: String::from(PLACEHOLDER),
            second_place: String::from(PLACEHOLDER),
            third_place: String::from(PLACEHOLDER),
            status: LeagueStatus::InProgress,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == LeagueStatus::Completed
    }
}

impl Searchable for League {
    fn searchable_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.season.as_str()),
            Cow::Borrowed(self.winner.as_str()),
            Cow::Borrowed(self.second_place.as_str()),
            Cow::Borrowed(self.third_place.as_str()),
            Cow::Borrowed(self.status.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_league_placeholders() {
        let league = League::new("31125");

        assert_eq!(league.season, "Virtuális Labdarúgás Liga Mód Retail 31125");
        assert_eq!(league.winner, "-");
        assert_eq!(league.second_place, "-");
        assert_eq!(league.third_place, "-");
        assert_eq!(league.status, LeagueStatus::InProgress);
        assert!(!league.is_completed());
    }

    #[test]
    fn test_search_is_case_insensitive_per_field() {
        let mut league = League::new("7");
        league.winner = String::from("Arsenal");

        assert!(league.matches_search("arsenal"));
        assert!(league.matches_search("LIGA"));
        assert!(league.matches_search("in progress"));
        assert!(league.matches_search("   "));
        assert!(!league.matches_search("chelsea"));
    }

    #[test]
    fn test_search_does_not_span_fields() {
        let mut league = League::new("7");
        league.winner = String::from("Arsenal");
        league.second_place = String::from("Chelsea");

        assert!(league.to_searchable_text().contains("Arsenal Chelsea"));
        assert!(!league.matches_search("arsenal chelsea"));
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(League::new("1")).unwrap();

        assert_eq!(json["secondPlace"], "-");
        assert_eq!(json["thirdPlace"], "-");
        assert_eq!(json["status"], "In Progress");
    }
}
