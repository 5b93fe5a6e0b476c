use crate::generator::MOCK_OUTPUTS_FOLDER;
use std::path::{Path, PathBuf};

/// Folder, next to the logic app project, that holds all unit tests.
pub const TESTS_DIRECTORY_NAME: &str = "Tests";

/// Suffix of a saved unit test definition file.
pub const UNIT_TEST_FILE_SUFFIX: &str = ".unit-test.json";

/// The on-disk layout of the unit tests for one workflow.
///
/// ```text
/// <workspace>/
///   <logic app>/            project_path
///   Tests/                  tests_directory
///     <logic app>/          logic_app_folder
///       <workflow>/         workflow_folder
///         MockOutputs/
///         <unit test>/      unit_test_folder
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTestPaths {
    pub tests_directory: PathBuf,
    pub logic_app_name: String,
    pub logic_app_folder: PathBuf,
    pub workflow_folder: PathBuf,
    pub unit_test_folder: Option<PathBuf>,
}

impl UnitTestPaths {
    pub fn new(project_path: &Path, workflow_name: &str, unit_test_name: Option<&str>) -> Self {
        let workspace = project_path.parent().unwrap_or(project_path);
        let tests_directory = workspace.join(TESTS_DIRECTORY_NAME);
        let logic_app_name = project_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let logic_app_folder = tests_directory.join(&logic_app_name);
        let workflow_folder = logic_app_folder.join(workflow_name);
        let unit_test_folder = unit_test_name.map(|name| workflow_folder.join(name));

        Self {
            tests_directory,
            logic_app_name,
            logic_app_folder,
            workflow_folder,
            unit_test_folder,
        }
    }

    /// `<workflow_folder>/<name>.unit-test.json`
    pub fn unit_test_file(&self, unit_test_name: &str) -> PathBuf {
        self.workflow_folder
            .join(format!("{}{}", unit_test_name, UNIT_TEST_FILE_SUFFIX))
    }

    pub fn mock_outputs_folder(&self) -> PathBuf {
        self.workflow_folder.join(MOCK_OUTPUTS_FOLDER)
    }
}
