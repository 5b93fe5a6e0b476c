//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! mockgen crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use mockgen::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let run_id = extract_and_validate_run_id(Some("/workflows/Orders/runs/08584737551867954143243946780CU57"))?;
//! let json = std::fs::read_to_string("Orders.unit-test.json")?;
//! let written = process_unit_test_definition(&json, Path::new("Tests/MyApp/Orders"), "MyApp")?;
//! println!("{}: {} mock files", run_id, written.len());
//! # Ok(())
//! # }
//! ```

// Generation
pub use crate::generator::{GeneratedMock, MockGenerator, process_unit_test_definition};

// Definitions and filtering
pub use crate::operation::{
    MockableOperation, OperationInfo, OutputParameter, UnitTestDefinition, filter_mockable,
    is_mockable,
};

// Schema and class trees
pub use crate::codegen::{ClassDefinition, PropertyDefinition, build_class_definition};
pub use crate::schema::{SchemaNode, SchemaType, TypeMap, normalize_key};

// Unit test tooling
pub use crate::unit_test::{UnitTestPaths, extract_and_validate_run_id};

// Error types
pub use crate::error::{GenerateError, RunIdError, UnitTestError};

pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
