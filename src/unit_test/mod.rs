//! Supporting tooling around codeful unit tests: run identifiers, unit test
//! naming, the on-disk layout, saved definitions/results and the test project
//! scaffold.

pub mod name;
pub mod paths;
pub mod run_id;
pub mod scaffold;
pub mod store;

pub use name::*;
pub use paths::*;
pub use run_id::*;
pub use scaffold::*;
pub use store::*;
