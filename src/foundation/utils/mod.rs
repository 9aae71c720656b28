mod artist_utils;
mod progress;

pub use artist_utils::*;
pub use progress::*;
