//! Scaffolding for the C# test project that consumes generated mocks.
//!
//! Three templates are rendered: the test project file, the `nuget.config`
//! for the tests directory and one test class per unit test. Templates use
//! `<%= Name %>` placeholders. In code positions (namespace, class,
//! constructor and test method names) `-` is replaced by `_`; everywhere else
//! the names are inserted as written.

use super::paths::UnitTestPaths;
use crate::codegen::sanitize_namespace;
use crate::error::UnitTestError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSPROJ_TEMPLATE_FILE: &str = "TestProjectFile";
pub const TEST_CLASS_TEMPLATE_FILE: &str = "TestClassFile";
pub const NUGET_CONFIG_TEMPLATE_FILE: &str = "TestNugetConfig";
pub const NUGET_CONFIG_FILE_NAME: &str = "nuget.config";

// The project template spells its placeholder in camel case.
const CSPROJ_LOGIC_APP: &str = "<%= logicAppName %>";
const LOGIC_APP: &str = "<%= LogicAppName %>";
const WORKFLOW: &str = "<%= WorkflowName %>";
const UNIT_TEST: &str = "<%= UnitTestName %>";

/// Template texts for the test project files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldTemplates {
    pub csproj: String,
    pub test_class: String,
    pub nuget_config: String,
}

impl ScaffoldTemplates {
    /// Reads `TestProjectFile`, `TestClassFile` and `TestNugetConfig` from
    /// `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, UnitTestError> {
        Ok(Self {
            csproj: read_template(&dir.join(CSPROJ_TEMPLATE_FILE))?,
            test_class: read_template(&dir.join(TEST_CLASS_TEMPLATE_FILE))?,
            nuget_config: read_template(&dir.join(NUGET_CONFIG_TEMPLATE_FILE))?,
        })
    }
}

/// Fills the logic app name into a test project template.
pub fn render_csproj(template: &str, logic_app_name: &str) -> String {
    template.replace(CSPROJ_LOGIC_APP, logic_app_name)
}

/// Fills a test class template.
pub fn render_test_class(
    template: &str,
    unit_test_name: &str,
    workflow_name: &str,
    logic_app_name: &str,
) -> String {
    let unit_test_code = sanitize_namespace(unit_test_name);
    let workflow_code = sanitize_namespace(workflow_name);
    let logic_app_code = sanitize_namespace(logic_app_name);

    let code_positions = [
        (
            format!("namespace {}.Tests", LOGIC_APP),
            format!("namespace {}.Tests", logic_app_code),
        ),
        (
            format!("public class {}", UNIT_TEST),
            format!("public class {}", unit_test_code),
        ),
        (
            format!("<see cref=\"{}\" />", UNIT_TEST),
            format!("<see cref=\"{}\" />", unit_test_code),
        ),
        (
            format!("public {}()", UNIT_TEST),
            format!("public {}()", unit_test_code),
        ),
        (
            format!("public async Task {}_{}_ExecuteWorkflow", WORKFLOW, UNIT_TEST),
            format!(
                "public async Task {}_{}_ExecuteWorkflow",
                workflow_code, unit_test_code
            ),
        ),
    ];

    let rendered = code_positions
        .iter()
        .fold(template.to_string(), |text, (from, to)| text.replace(from, to));

    rendered
        .replace(LOGIC_APP, logic_app_name)
        .replace(WORKFLOW, workflow_name)
        .replace(UNIT_TEST, unit_test_name)
}

/// Writes `<logic_app_folder>/<logic app>.csproj` unless it already exists.
///
/// Returns the path when a file was created.
pub fn ensure_csproj_file(
    paths: &UnitTestPaths,
    template: &str,
) -> Result<Option<PathBuf>, UnitTestError> {
    let path = paths
        .logic_app_folder
        .join(format!("{}.csproj", paths.logic_app_name));
    if path.exists() {
        return Ok(None);
    }
    info!("Creating .csproj file at: {}", path.display());
    write_file(&path, &render_csproj(template, &paths.logic_app_name))?;
    Ok(Some(path))
}

/// Writes `<tests_directory>/nuget.config`, replacing any existing file.
pub fn write_nuget_config(
    paths: &UnitTestPaths,
    template: &str,
) -> Result<PathBuf, UnitTestError> {
    let path = paths.tests_directory.join(NUGET_CONFIG_FILE_NAME);
    write_file(&path, template)?;
    info!("Created nuget.config file at: {}", path.display());
    Ok(path)
}

/// Writes `<unit test folder>/<unit test>.cs` from the test class template.
///
/// The unit test folder is `paths.unit_test_folder`, or
/// `<workflow_folder>/<unit test>` when the paths were built without one.
pub fn write_test_class(
    paths: &UnitTestPaths,
    workflow_name: &str,
    unit_test_name: &str,
    template: &str,
) -> Result<PathBuf, UnitTestError> {
    let folder = paths
        .unit_test_folder
        .clone()
        .unwrap_or_else(|| paths.workflow_folder.join(unit_test_name));
    let path = folder.join(format!("{}.cs", unit_test_name));
    let source = render_test_class(
        template,
        unit_test_name,
        workflow_name,
        &paths.logic_app_name,
    );
    write_file(&path, &source)?;
    info!("Created .cs file at: {}", path.display());
    Ok(path)
}

/// Makes sure the test project exists and adds the test class for one unit
/// test. Returns every file written, in order.
pub fn scaffold_unit_test(
    paths: &UnitTestPaths,
    workflow_name: &str,
    unit_test_name: &str,
    templates: &ScaffoldTemplates,
) -> Result<Vec<PathBuf>, UnitTestError> {
    let mut written = Vec::new();
    written.extend(ensure_csproj_file(paths, &templates.csproj)?);
    written.push(write_nuget_config(paths, &templates.nuget_config)?);
    written.push(write_test_class(
        paths,
        workflow_name,
        unit_test_name,
        &templates.test_class,
    )?);
    Ok(written)
}

fn read_template(path: &Path) -> Result<String, UnitTestError> {
    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

fn write_file(path: &Path, contents: &str) -> Result<(), UnitTestError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, e: std::io::Error) -> UnitTestError {
    UnitTestError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
