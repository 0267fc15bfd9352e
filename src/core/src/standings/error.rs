use crate::r#match::MatchError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandingsError {
    #[error("match {home_team} - {away_team} (round {round}): {source}")]
    InvalidMatch {
        round: String,
        home_team: String,
        away_team: String,
        #[source]
        source: MatchError,
    },
}
