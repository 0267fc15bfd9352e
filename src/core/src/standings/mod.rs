mod error;
mod stats;
mod table;

pub use error::*;
pub use stats::*;
pub use table::*;
