//! # mockgen - Mock Output Class Generator
//!
//! **mockgen** turns the output schemas recorded for a Logic Apps workflow run
//! into strongly-typed C# classes that a codeful unit test project can use to
//! mock trigger and action outputs.
//!
//! ## Core Workflow
//!
//! 1.  **Load the definition**: Parse a workflow unit test definition into a
//!     [`UnitTestDefinition`](operation::UnitTestDefinition). It carries
//!     `operationInfo` (type and identity per operation) and `outputParameters`
//!     (the flat, dotted output keys per operation).
//! 2.  **Filter**: Only mockable operations are kept, deduplicated by operation
//!     identity. Their flat keys are normalized and folded into a
//!     [`SchemaNode`](schema::SchemaNode) tree.
//! 3.  **Build**: Each tree becomes a [`ClassDefinition`](codegen::ClassDefinition)
//!     tree, with one nested class per object-typed node.
//! 4.  **Emit**: The class tree is rendered as one C# file per operation under
//!     `<workflow folder>/MockOutputs/`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mockgen::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let json = std::fs::read_to_string("Tests/MyApp/Orders/Smoke.unit-test.json")?;
//!     let definition = UnitTestDefinition::from_json(&json)?;
//!
//!     let generator = MockGenerator::builder("my-app")
//!         .with_type_mapping("date-time", "DateTimeOffset")
//!         .build();
//!
//!     for mock in generator.render(&definition) {
//!         println!("{} ({} classes)", mock.class_name, mock.definition.class_count());
//!     }
//!
//!     let written = generator.write(&definition, Path::new("Tests/MyApp/Orders"))?;
//!     println!("Wrote {} files", written.len());
//!     Ok(())
//! }
//! ```

pub mod codegen;
pub mod error;
pub mod generator;
pub mod operation;
pub mod prelude;
pub mod schema;
pub mod unit_test;
