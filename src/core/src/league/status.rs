use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeagueStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl LeagueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeagueStatus::InProgress => "In Progress",
            LeagueStatus::Completed => "Completed",
        }
    }

    /// A league only ever moves forward: In Progress -> Completed.
    pub fn can_become(&self, next: LeagueStatus) -> bool {
        !matches!((self, next), (LeagueStatus::Completed, LeagueStatus::InProgress))
    }
}

impl Display for LeagueStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
