mod league;
mod matches;

pub use league::*;
pub use matches::*;
