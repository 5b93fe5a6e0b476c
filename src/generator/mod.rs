use crate::codegen::{ClassBuilder, ClassDefinition, build_root_with, emit_compilation_unit};
use crate::error::GenerateError;
use crate::operation::{UnitTestDefinition, filter_mockable};
use crate::schema::TypeMap;
use std::path::{Path, PathBuf};

mod output;

pub use output::MOCK_OUTPUTS_FOLDER;

pub const DEFAULT_FILE_EXTENSION: &str = "cs";

/// The rendered mock classes for one operation.
#[derive(Debug, Clone)]
pub struct GeneratedMock {
    pub operation_name: String,
    pub class_name: String,
    pub is_trigger: bool,
    pub definition: ClassDefinition,
    pub source: String,
}

impl GeneratedMock {
    /// `<ClassName>.<extension>`
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.class_name, extension)
    }
}

/// Generates mock output classes for the mockable operations of a workflow.
pub struct MockGenerator {
    logic_app_name: String,
    type_map: TypeMap,
    output_folder: String,
    file_extension: String,
}

pub struct MockGeneratorBuilder {
    logic_app_name: String,
    type_map: TypeMap,
    output_folder: String,
    file_extension: String,
}

impl MockGeneratorBuilder {
    pub fn new(logic_app_name: &str) -> Self {
        Self {
            logic_app_name: logic_app_name.to_string(),
            type_map: TypeMap::default(),
            output_folder: MOCK_OUTPUTS_FOLDER.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }

    /// Emits `csharp_type` for every schema node tagged `tag`.
    pub fn with_type_mapping(mut self, tag: &str, csharp_type: &str) -> Self {
        self.type_map.insert(tag, csharp_type);
        self
    }

    pub fn with_type_map(mut self, type_map: TypeMap) -> Self {
        self.type_map = type_map;
        self
    }

    /// Name of the folder, under the workflow folder, that receives the files.
    pub fn with_output_folder(mut self, folder: &str) -> Self {
        self.output_folder = folder.to_string();
        self
    }

    pub fn with_file_extension(mut self, extension: &str) -> Self {
        self.file_extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn build(self) -> MockGenerator {
        MockGenerator {
            logic_app_name: self.logic_app_name,
            type_map: self.type_map,
            output_folder: self.output_folder,
            file_extension: self.file_extension,
        }
    }
}

impl MockGenerator {
    pub fn builder(logic_app_name: &str) -> MockGeneratorBuilder {
        MockGeneratorBuilder::new(logic_app_name)
    }

    pub fn logic_app_name(&self) -> &str {
        &self.logic_app_name
    }

    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    /// Renders the mocks for a definition without touching the filesystem.
    ///
    /// One entry per mockable operation, in the definition's operation order.
    /// All mocks share one namespace, so class names are unique across the
    /// whole pass; a clashing root class (and its file) gets a numeric suffix.
    pub fn render(&self, definition: &UnitTestDefinition) -> Vec<GeneratedMock> {
        let mut builder = ClassBuilder::new(&self.type_map);
        filter_mockable(&definition.operation_info, &definition.output_parameters)
            .into_iter()
            .map(|op| {
                let root = build_root_with(&mut builder, &op.class_name, &op.outputs);
                let source = emit_compilation_unit(&root, &self.logic_app_name);
                GeneratedMock {
                    operation_name: op.operation_name,
                    class_name: root.class_name.clone(),
                    is_trigger: op.is_trigger,
                    definition: root,
                    source,
                }
            })
            .collect()
    }

    /// The folder the files for `workflow_folder` are written to.
    pub fn output_dir(&self, workflow_folder: &Path) -> PathBuf {
        workflow_folder.join(&self.output_folder)
    }

    /// Renders the mocks for a definition and writes one file per mock.
    ///
    /// The output folder is created on demand. Returns the written paths.
    pub fn write(
        &self,
        definition: &UnitTestDefinition,
        workflow_folder: &Path,
    ) -> Result<Vec<PathBuf>, GenerateError> {
        let mocks = self.render(definition);
        output::write_mocks(&mocks, &self.output_dir(workflow_folder), &self.file_extension)
    }
}

/// Parses a unit test definition and writes its mock output classes.
pub fn process_unit_test_definition(
    definition_json: &str,
    workflow_folder: &Path,
    logic_app_name: &str,
) -> Result<Vec<PathBuf>, GenerateError> {
    let definition = UnitTestDefinition::from_json(definition_json)?;
    MockGenerator::builder(logic_app_name)
        .build()
        .write(&definition, workflow_folder)
}
