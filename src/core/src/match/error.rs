use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("unrecognized match date '{0}'")]
    InvalidDate(String),
    #[error("team name must not be empty")]
    EmptyTeamName,
    #[error("team '{0}' cannot play against itself")]
    SameTeam(String),
    #[error("half-time score {ht_home}-{ht_away} exceeds full-time score {home}-{away}")]
    HalfTimeExceedsFullTime {
        ht_home: u8,
        ht_away: u8,
        home: u8,
        away: u8,
    },
}
