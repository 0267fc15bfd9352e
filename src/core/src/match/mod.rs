mod date;
mod error;
mod outcome;
mod record;

pub use date::*;
pub use error::*;
pub use outcome::*;
pub use record::*;
