mod error;
mod generators;
mod loaders;

pub use error::*;
pub use generators::*;
pub use loaders::*;

pub struct DatabaseEntity {
    pub leagues: Vec<LeagueEntity>,
    pub matches: Vec<LeagueMatchesEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Parses the sample dataset compiled into the binary.
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        Ok(DatabaseEntity {
            leagues: LeagueLoader::load()?,
            matches: MatchLoader::load()?,
        })
    }
}
