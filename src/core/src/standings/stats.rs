use crate::r#match::{Match, MatchOutcome, ScoreKind};
use crate::standings::StandingsError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Number of most recent matches encoded in a team's form.
pub const FORM_WINDOW: usize = 5;

/// Aggregated record of one team over a match list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub team: String,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    /// Outcome codes of the last `FORM_WINDOW` matches, oldest first.
    pub form: String,
}

impl TeamStats {
    pub fn empty(team: &str) -> Self {
        TeamStats {
            team: team.to_string(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: String::new(),
        }
    }

    fn record(&mut self, own: u8, opponent: u8) -> MatchOutcome {
        let outcome = MatchOutcome::from_scores(own, opponent);

        self.played += 1;
        self.goals_for += own as u32;
        self.goals_against += opponent as u32;
        self.points += outcome.points();

        match outcome {
            MatchOutcome::Win => self.won += 1,
            MatchOutcome::Draw => self.drawn += 1,
            MatchOutcome::Loss => self.lost += 1,
        }

        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;

        outcome
    }
}

/// Full-time statistics of `team` over `matches`.
pub fn compute_team_stats(team: &str, matches: &[Match]) -> Result<TeamStats, StandingsError> {
    compute_team_stats_by(team, matches, ScoreKind::FullTime)
}

pub fn compute_team_stats_by(
    team: &str,
    matches: &[Match],
    kind: ScoreKind,
) -> Result<TeamStats, StandingsError> {
    let mut stats = TeamStats::empty(team);

    // (kickoff, list index, outcome); the index breaks kickoff ties
    let mut played: Vec<(NaiveDateTime, usize, MatchOutcome)> = Vec::new();

    for (idx, item) in matches.iter().enumerate() {
        let Some((own, opponent)) = item.score_for(team, kind) else {
            continue;
        };

        let kickoff = item.kickoff().map_err(|source| StandingsError::InvalidMatch {
            round: item.round.clone(),
            home_team: item.home_team.clone(),
            away_team: item.away_team.clone(),
            source,
        })?;

        let outcome = stats.record(own, opponent);

        played.push((kickoff, idx, outcome));
    }

    played.sort_by_key(|(kickoff, idx, _)| (*kickoff, *idx));

    let skip = played.len().saturating_sub(FORM_WINDOW);

    stats.form = played[skip..]
        .iter()
        .map(|(_, _, outcome)| outcome.code())
        .collect();

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::MatchError;

    fn full_time(date: &str, home: &str, away: &str, home_score: u8, away_score: u8) -> Match {
        Match::new("1", date, home, away, (0, 0), (home_score, away_score))
    }

    fn scenario() -> Vec<Match> {
        vec![
            full_time("2024-08-17", "A", "B", 2, 1),
            full_time("2024-08-24", "B", "A", 0, 0),
        ]
    }

    #[test]
    fn test_home_and_away_aggregation() {
        let matches = scenario();

        let a = compute_team_stats("A", &matches).unwrap();
        assert_eq!(
            (a.played, a.won, a.drawn, a.lost, a.goals_for, a.goals_against, a.points),
            (2, 1, 1, 0, 2, 1, 4)
        );
        assert_eq!(a.goal_difference, 1);

        let b = compute_team_stats("B", &matches).unwrap();
        assert_eq!(
            (b.played, b.won, b.drawn, b.lost, b.goals_for, b.goals_against, b.points),
            (2, 0, 1, 1, 1, 2, 1)
        );
        assert_eq!(b.goal_difference, -1);
    }

    #[test]
    fn test_absent_team_is_all_zero() {
        let stats = compute_team_stats("Z", &scenario()).unwrap();

        assert_eq!(stats, TeamStats::empty("Z"));
        assert!(stats.form.is_empty());
    }

    #[test]
    fn test_empty_match_list() {
        let stats = compute_team_stats("A", &[]).unwrap();

        assert_eq!(stats.played, 0);
        assert_eq!(stats.points, 0);
        assert_eq!(stats.goal_difference, 0);
    }

    #[test]
    fn test_played_equals_outcomes_and_goal_difference() {
        let matches = vec![
            full_time("2024-08-01", "A", "B", 3, 0),
            full_time("2024-08-02", "C", "A", 2, 2),
            full_time("2024-08-03", "A", "C", 0, 1),
            full_time("2024-08-04", "B", "C", 1, 1),
            full_time("2024-08-05", "B", "A", 4, 1),
        ];

        for team in ["A", "B", "C", "D"] {
            let stats = compute_team_stats(team, &matches).unwrap();

            assert_eq!(stats.played, stats.won + stats.drawn + stats.lost);
            assert_eq!(
                stats.goal_difference,
                stats.goals_for as i32 - stats.goals_against as i32
            );
            assert_eq!(stats.points, stats.won as u32 * 3 + stats.drawn as u32);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let matches = scenario();

        assert_eq!(
            compute_team_stats("A", &matches).unwrap(),
            compute_team_stats("A", &matches).unwrap()
        );
    }

    #[test]
    fn test_form_is_chronological_regardless_of_list_order() {
        let matches = vec![
            full_time("2024-08-24", "A", "B", 0, 1),
            full_time("2024-08-10", "A", "C", 2, 0),
            full_time("2024-08-17", "D", "A", 1, 1),
        ];

        let stats = compute_team_stats("A", &matches).unwrap();

        assert_eq!(stats.form, "WDL");
    }

    #[test]
    fn test_form_keeps_last_five_most_recent_last() {
        let matches = vec![
            full_time("2024-08-01", "A", "B", 0, 1),
            full_time("2024-08-02", "A", "B", 1, 0),
            full_time("2024-08-03", "A", "B", 1, 1),
            full_time("2024-08-04", "A", "B", 1, 0),
            full_time("2024-08-05", "A", "B", 0, 2),
            full_time("2024-08-06", "A", "B", 3, 0),
        ];

        let stats = compute_team_stats("A", &matches).unwrap();

        assert_eq!(stats.form.len(), FORM_WINDOW);
        assert_eq!(stats.form, "WDWLW");
        assert_eq!(stats.played, 6);
    }

    #[test]
    fn test_form_ties_keep_list_order() {
        let matches = vec![
            full_time("2024-08-01", "A", "B", 1, 0),
            full_time("2024-08-01", "C", "A", 1, 0),
        ];

        let stats = compute_team_stats("A", &matches).unwrap();

        assert_eq!(stats.form, "WL");
    }

    #[test]
    fn test_half_time_scores() {
        let matches = vec![Match::new("1", "2024-08-17", "A", "B", (0, 1), (2, 1))];

        let stats = compute_team_stats_by("A", &matches, ScoreKind::HalfTime).unwrap();

        assert_eq!((stats.lost, stats.goals_for, stats.goals_against), (1, 0, 1));
        assert_eq!(stats.form, "L");
    }

    #[test]
    fn test_unparseable_date_fails_fast() {
        let matches = vec![full_time("soon", "A", "B", 1, 0)];

        let err = compute_team_stats("A", &matches).unwrap_err();

        assert_eq!(
            err,
            StandingsError::InvalidMatch {
                round: "1".to_string(),
                home_team: "A".to_string(),
                away_team: "B".to_string(),
                source: MatchError::InvalidDate("soon".to_string()),
            }
        );
    }

    #[test]
    fn test_unparseable_date_in_unrelated_match_is_ignored() {
        let matches = vec![
            full_time("2024-08-17", "A", "B", 1, 0),
            full_time("soon", "C", "D", 1, 0),
        ];

        assert!(compute_team_stats("A", &matches).is_ok());
    }
}
