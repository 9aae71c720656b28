pub mod error;
pub mod models;
pub mod utils;

pub use error::GraphError;
pub use models::*;
