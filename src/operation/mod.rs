pub mod filter;
pub mod info;

pub use filter::*;
pub use info::*;
