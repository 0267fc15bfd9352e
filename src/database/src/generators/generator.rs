use crate::{DatabaseEntity, DatabaseError, LeagueEntity, MatchEntity};
use league_core::{League, LeagueStore, Match};
use log::debug;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds a populated store from the loaded sample dataset.
    pub fn generate(data: &DatabaseEntity) -> Result<LeagueStore, DatabaseError> {
        let leagues = data.leagues.iter().map(DatabaseGenerator::generate_league).collect();

        let mut store = LeagueStore::with_leagues(leagues)?;

        for league_matches in &data.matches {
            let matches: Vec<Match> = league_matches
                .matches
                .iter()
                .map(DatabaseGenerator::generate_match)
                .collect();

            debug!(
                "seeding league {} with {} matches",
                league_matches.league_id,
                matches.len()
            );

            store.replace_league_matches(&league_matches.league_id, matches)?;
        }

        Ok(store)
    }

    fn generate_league(league: &LeagueEntity) -> League {
        League {
            id: league.id.clone(),
            season: league.season.clone(),
            winner: league.winner.clone(),
            second_place: league.second_place.clone(),
            third_place: league.third_place.clone(),
            status: league.status,
        }
    }

    fn generate_match(item: &MatchEntity) -> Match {
        Match::new(
            item.round.clone(),
            item.date.clone(),
            item.home_team.clone(),
            item.away_team.clone(),
            (item.ht_home_score, item.ht_away_score),
            (item.home_score, item.away_score),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;
    use league_core::LeagueStatus;

    #[test]
    fn test_sample_dataset_loads() {
        let data = DatabaseLoader::load().unwrap();

        assert_eq!(data.leagues.len(), 4);
        assert_eq!(data.matches.len(), 2);
    }

    #[test]
    fn test_sample_dataset_generates_store() {
        let data = DatabaseLoader::load().unwrap();

        let store = DatabaseGenerator::generate(&data).unwrap();

        assert_eq!(store.leagues().len(), 4);
        assert_eq!(store.league("31120").unwrap().status, LeagueStatus::Completed);
        assert_eq!(store.league("31122").unwrap().status, LeagueStatus::InProgress);
        assert_eq!(store.matches("31122").len(), 9);
        assert!(store.matches("31120").is_empty());
    }

    #[test]
    fn test_sample_standings() {
        let store = DatabaseGenerator::generate(&DatabaseLoader::load().unwrap()).unwrap();

        let table = store.standings("31122").unwrap();

        let order: Vec<&str> = table.iter().map(|e| e.stats.team.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "London Ágyúk",
                "Chelsea",
                "Manchester Kék",
                "Manchester Piros",
                "Liverpool",
                "Tottenham",
            ]
        );

        let leader = &table[0].stats;
        assert_eq!((leader.points, leader.goals_for, leader.goals_against), (7, 6, 2));
        assert_eq!(leader.form, "DWW");
    }

    #[test]
    fn test_matches_for_unknown_league_are_rejected() {
        let mut data = DatabaseLoader::load().unwrap();
        data.matches[0].league_id = String::from("missing");

        assert!(matches!(
            DatabaseGenerator::generate(&data),
            Err(DatabaseError::Store(_))
        ));
    }
}
