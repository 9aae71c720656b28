mod builder;
mod cooccurrence;
mod emitter;

pub use builder::*;
pub use cooccurrence::*;
pub use emitter::*;
