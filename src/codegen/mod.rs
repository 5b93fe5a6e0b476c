pub mod builder;
pub mod definition;
pub mod emitter;
pub mod naming;

pub use builder::*;
pub use definition::*;
pub use emitter::*;
pub use naming::*;
