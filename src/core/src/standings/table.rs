use crate::r#match::{Match, ScoreKind};
use crate::standings::{StandingsError, TeamStats, compute_team_stats_by};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub position: usize,
    #[serde(flatten)]
    pub stats: TeamStats,
}

/// Compact standings row for the form table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamForm {
    pub position: usize,
    pub team: String,
    pub played: u16,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
    pub form: String,
}

impl From<&StandingsEntry> for TeamForm {
    fn from(entry: &StandingsEntry) -> Self {
        TeamForm {
            position: entry.position,
            team: entry.stats.team.clone(),
            played: entry.stats.played,
            goals_for: entry.stats.goals_for,
            goals_against: entry.stats.goals_against,
            points: entry.stats.points,
            form: entry.stats.form.clone(),
        }
    }
}

/// Points, then goal difference, then goals scored, all descending; team name
/// ascending settles the rest. Team names are unique so the order is total.
fn compare_rows(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team.cmp(&b.team))
}

fn distinct_teams(matches: &[Match]) -> impl Iterator<Item = &str> {
    matches
        .iter()
        .flat_map(|item| [item.home_team.as_str(), item.away_team.as_str()])
        .unique()
}

pub fn build_standings_by(
    matches: &[Match],
    kind: ScoreKind,
) -> Result<Vec<StandingsEntry>, StandingsError> {
    let rows: Vec<TeamStats> = distinct_teams(matches)
        .map(|team| compute_team_stats_by(team, matches, kind))
        .collect::<Result<_, _>>()?;

    Ok(rows
        .into_iter()
        .sorted_by(compare_rows)
        .enumerate()
        .map(|(idx, stats)| StandingsEntry {
            position: idx + 1,
            stats,
        })
        .collect())
}

/// Full-time standings table, one entry per team appearing in `matches`.
pub fn build_standings(matches: &[Match]) -> Result<Vec<StandingsEntry>, StandingsError> {
    build_standings_by(matches, ScoreKind::FullTime)
}

/// Standings as they would read if every match had ended at half-time.
pub fn build_half_time_standings(
    matches: &[Match],
) -> Result<Vec<StandingsEntry>, StandingsError> {
    build_standings_by(matches, ScoreKind::HalfTime)
}

pub fn build_form_table(matches: &[Match]) -> Result<Vec<TeamForm>, StandingsError> {
    Ok(build_standings(matches)?.iter().map(TeamForm::from).collect())
}
