pub mod configuration;
pub mod foundation;
pub mod graph;
pub mod sampling;
pub mod startup;

pub use configuration::*;
pub use foundation::*;
pub use graph::*;
pub use sampling::Sampler;
