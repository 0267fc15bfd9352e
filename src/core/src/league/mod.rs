mod model;
mod search;
mod status;

pub use model::*;
pub use search::*;
pub use status::*;
