pub mod league;
pub mod r#match;
pub mod standings;
pub mod store;
pub mod utils;

pub use league::{League, LeagueStatus, Searchable};
pub use r#match::{Match, MatchError, MatchOutcome, ScoreKind};
pub use standings::{
    StandingsEntry, StandingsError, TeamForm, TeamStats, build_form_table,
    build_half_time_standings, build_standings, compute_team_stats, FORM_WINDOW,
};
pub use store::{LeagueStore, StoreError};
pub use utils::*;
