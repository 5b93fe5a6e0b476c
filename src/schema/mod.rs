pub mod key;
pub mod node;
pub mod types;

pub use key::*;
pub use node::*;
pub use types::*;
