use crate::r#match::MatchError;
use crate::standings::StandingsError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("league with id '{0}' already exists")]
    DuplicateLeague(String),
    #[error("league id must not be blank")]
    InvalidId,
    #[error("league with id '{0}' not found")]
    LeagueNotFound(String),
    #[error("no league is open for editing")]
    NoOpenLeague,
    #[error("league '{0}' is completed and cannot be reopened")]
    StatusRegression(String),
    #[error("invalid match #{index}: {source}")]
    InvalidMatch {
        index: usize,
        #[source]
        source: MatchError,
    },
    #[error(transparent)]
    Standings(#[from] StandingsError),
}
