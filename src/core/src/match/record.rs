use crate::r#match::{MatchDate, MatchError, MatchOutcome};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which pair of scores a computation reads from a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreKind {
    #[default]
    FullTime,
    HalfTime,
}

/// One recorded fixture. Team names are free text; equal strings are the same team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub round: String,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub ht_home_score: u8,
    pub ht_away_score: u8,
    pub home_score: u8,
    pub away_score: u8,
}

impl Match {
    pub fn new(
        round: impl Into<String>,
        date: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        half_time: (u8, u8),
        full_time: (u8, u8),
    ) -> Self {
        Match {
            round: round.into(),
            date: date.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            ht_home_score: half_time.0,
            ht_away_score: half_time.1,
            home_score: full_time.0,
            away_score: full_time.1,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// (home, away) goals for the requested period.
    pub fn score(&self, kind: ScoreKind) -> (u8, u8) {
        match kind {
            ScoreKind::FullTime => (self.home_score, self.away_score),
            ScoreKind::HalfTime => (self.ht_home_score, self.ht_away_score),
        }
    }

    /// (own, opponent) goals for `team`, or `None` when the team did not play.
    pub fn score_for(&self, team: &str, kind: ScoreKind) -> Option<(u8, u8)> {
        let (home, away) = self.score(kind);

        if self.home_team == team {
            Some((home, away))
        } else if self.away_team == team {
            Some((away, home))
        } else {
            None
        }
    }

    pub fn outcome_for(&self, team: &str, kind: ScoreKind) -> Option<MatchOutcome> {
        self.score_for(team, kind)
            .map(|(own, opponent)| MatchOutcome::from_scores(own, opponent))
    }

    pub fn kickoff(&self) -> Result<NaiveDateTime, MatchError> {
        MatchDate::parse(&self.date).ok_or_else(|| MatchError::InvalidDate(self.date.clone()))
    }

    /// Checks the record is usable for standings: distinct named teams,
    /// a parseable date and half-time goals not above full-time goals.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.home_team.trim().is_empty() || self.away_team.trim().is_empty() {
            return Err(MatchError::EmptyTeamName);
        }

        if self.home_team == self.away_team {
            return Err(MatchError::SameTeam(self.home_team.clone()));
        }

        if self.ht_home_score > self.home_score || self.ht_away_score > self.away_score {
            return Err(MatchError::HalfTimeExceedsFullTime {
                ht_home: self.ht_home_score,
                ht_away: self.ht_away_score,
                home: self.home_score,
                away: self.away_score,
            });
        }

        self.kickoff()?;

        Ok(())
    }
}
