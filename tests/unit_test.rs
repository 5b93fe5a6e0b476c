//! Tests for run identifiers, unit test names, layout and saved files.
mod common;
use common::*;
use mockgen::error::{RunIdError, UnitTestError};
use mockgen::unit_test::*;
use serde_json::json;
use std::fs;
use std::path::Path;

#[test]
fn test_run_id_accepts_bare_and_path_forms() {
    assert_eq!(
        extract_and_validate_run_id(Some("08584737551867954143243946780CU57")).unwrap(),
        "08584737551867954143243946780CU57"
    );
    assert_eq!(
        extract_and_validate_run_id(Some("/workflows/Orders/runs/08585ABC123 ")).unwrap(),
        "08585ABC123"
    );
    assert_eq!(
        extract_and_validate_run_id(Some("  ABC123  ")).unwrap(),
        "ABC123"
    );
}

#[test]
fn test_run_id_failures() {
    assert_eq!(extract_and_validate_run_id(None), Err(RunIdError::Missing));
    assert_eq!(extract_and_validate_run_id(Some("")), Err(RunIdError::Missing));
    assert_eq!(
        extract_and_validate_run_id(Some("   ")),
        Err(RunIdError::InvalidFormat(String::new()))
    );
    assert!(matches!(
        extract_and_validate_run_id(Some("08585abc")),
        Err(RunIdError::InvalidFormat(_))
    ));
    assert!(matches!(
        extract_and_validate_run_id(Some("/workflows/Orders/runs/")),
        Err(RunIdError::InvalidFormat(_))
    ));
    assert!(matches!(
        extract_and_validate_run_id(Some("ABC-123")),
        Err(RunIdError::InvalidFormat(_))
    ));
    assert!(
        RunIdError::Missing
            .to_string()
            .contains("Run ID is required")
    );
}

#[test]
fn test_unit_test_paths_layout() {
    let paths = UnitTestPaths::new(Path::new("/work/OrdersApp"), "Orders", Some("Smoke"));
    assert_eq!(paths.tests_directory, Path::new("/work/Tests"));
    assert_eq!(paths.logic_app_name, "OrdersApp");
    assert_eq!(paths.logic_app_folder, Path::new("/work/Tests/OrdersApp"));
    assert_eq!(paths.workflow_folder, Path::new("/work/Tests/OrdersApp/Orders"));
    assert_eq!(
        paths.unit_test_folder.as_deref(),
        Some(Path::new("/work/Tests/OrdersApp/Orders/Smoke"))
    );
    assert_eq!(
        paths.unit_test_file("Smoke"),
        Path::new("/work/Tests/OrdersApp/Orders/Smoke.unit-test.json")
    );
    assert_eq!(
        paths.mock_outputs_folder(),
        Path::new("/work/Tests/OrdersApp/Orders/MockOutputs")
    );
}

#[test]
fn test_unit_test_name_format() {
    assert!(validate_unit_test_name_format("Smoke_test-1").is_ok());
    assert!(validate_unit_test_name_format("smoke").is_ok());
    assert_eq!(validate_unit_test_name_format(""), Err(UnitTestError::EmptyName));
    for bad in ["1smoke", "_smoke", "smoke test", "smoke.test", "smöke"] {
        assert_eq!(
            validate_unit_test_name_format(bad),
            Err(UnitTestError::InvalidName(bad.to_string())),
            "'{}' should be rejected",
            bad
        );
    }
}

#[test]
fn test_save_then_reject_existing_name() {
    let dir = tempfile::tempdir().unwrap();
    let paths = UnitTestPaths::new(&dir.path().join("OrdersApp"), "Orders", None);

    assert!(validate_unit_test_name(&paths, "Smoke").is_ok());
    let saved = save_unit_test_definition(&paths, "Smoke", &orders_definition()).unwrap();
    assert_eq!(saved, paths.unit_test_file("Smoke"));

    let text = fs::read_to_string(&saved).unwrap();
    assert!(text.starts_with("{\n    \"operationInfo\""));
    let reloaded = mockgen::operation::UnitTestDefinition::from_json(&text).unwrap();
    assert_eq!(reloaded, orders_definition());

    assert_eq!(
        validate_unit_test_name(&paths, "Smoke"),
        Err(UnitTestError::AlreadyExists("Smoke".to_string()))
    );
}

#[test]
fn test_discover_unit_tests() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    for (workflow, name) in [("Orders", "Smoke"), ("Billing", "Refund"), ("Orders", "Edge")] {
        let folder = root.join("OrdersApp").join(workflow);
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join(format!("{}.unit-test.json", name)), "{}").unwrap();
    }
    fs::write(root.join("OrdersApp").join("notes.json"), "{}").unwrap();

    let found = discover_unit_tests(root);
    let sep = std::path::MAIN_SEPARATOR;
    let labels: Vec<_> = found.iter().map(|(label, _)| label.clone()).collect();
    assert_eq!(
        labels,
        vec![
            format!("OrdersApp{}Billing - Refund", sep),
            format!("OrdersApp{}Orders - Edge", sep),
            format!("OrdersApp{}Orders - Smoke", sep),
        ]
    );
    assert!(found[0].1.ends_with("Refund.unit-test.json"));

    assert!(discover_unit_tests(&root.join("missing")).is_empty());
}

#[test]
fn test_unit_test_results() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Smoke.20240101.json"), json!({ "isSuccessful": false }).to_string()).unwrap();
    fs::write(dir.path().join("Smoke.20240301.json"), json!({ "isSuccessful": true }).to_string()).unwrap();
    fs::write(dir.path().join("Edge.20240201.json"), json!({ "isSuccessful": true }).to_string()).unwrap();

    let (label, data) = latest_unit_test_result(dir.path()).unwrap();
    assert_eq!(label, "Smoke");
    assert_eq!(data["isSuccessful"], json!(true));

    let all = list_unit_test_results(dir.path()).unwrap();
    let labels: Vec<_> = all.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["Edge", "Smoke", "Smoke"]);

    let empty = tempfile::tempdir().unwrap();
    assert!(matches!(
        latest_unit_test_result(empty.path()),
        Err(UnitTestError::NoResults(_))
    ));
}

#[test]
fn test_unit_test_name_from_path() {
    assert_eq!(unit_test_name_from_path(Path::new("/a/b/Smoke.unit-test.json")), "Smoke");
    assert_eq!(unit_test_name_from_path(Path::new("Plain")), "Plain");
}

const TEST_CLASS_TEMPLATE: &str = r#"namespace <%= LogicAppName %>.Tests
{
    /// <summary>
    /// The unit test class <see cref="<%= UnitTestName %>" /> for <%= WorkflowName %> in <%= LogicAppName %>.
    /// </summary>
    public class <%= UnitTestName %>
    {
        public <%= UnitTestName %>()
        {
            this.TestExecutor = new TestExecutor("<%= LogicAppName %>/<%= WorkflowName %>");
        }

        public async Task <%= WorkflowName %>_<%= UnitTestName %>_ExecuteWorkflow()
        {
            var definition = "<%= UnitTestName %>.unit-test.json";
        }
    }
}"#;

fn scaffold_templates() -> ScaffoldTemplates {
    ScaffoldTemplates {
        csproj: "<Project><Name><%= logicAppName %></Name></Project>".to_string(),
        test_class: TEST_CLASS_TEMPLATE.to_string(),
        nuget_config: "<configuration />".to_string(),
    }
}

#[test]
fn test_render_test_class_sanitizes_code_positions_only() {
    let rendered = render_test_class(TEST_CLASS_TEMPLATE, "smoke-run", "order-flow", "orders-app");
    let expected = r#"namespace orders_app.Tests
{
    /// <summary>
    /// The unit test class <see cref="smoke_run" /> for order-flow in orders-app.
    /// </summary>
    public class smoke_run
    {
        public smoke_run()
        {
            this.TestExecutor = new TestExecutor("orders-app/order-flow");
        }

        public async Task order_flow_smoke_run_ExecuteWorkflow()
        {
            var definition = "smoke-run.unit-test.json";
        }
    }
}"#;
    pretty_assertions::assert_eq!(rendered, expected);
}

#[test]
fn test_scaffold_creates_project_files_once() {
    let dir = tempfile::tempdir().unwrap();
    let paths = UnitTestPaths::new(&dir.path().join("orders-app"), "order-flow", Some("smoke-run"));
    let templates = scaffold_templates();

    let written = scaffold_unit_test(&paths, "order-flow", "smoke-run", &templates).unwrap();
    let csproj = paths.logic_app_folder.join("orders-app.csproj");
    let nuget = paths.tests_directory.join(NUGET_CONFIG_FILE_NAME);
    let test_class = paths
        .workflow_folder
        .join("smoke-run")
        .join("smoke-run.cs");
    assert_eq!(written, vec![csproj.clone(), nuget.clone(), test_class.clone()]);
    assert_eq!(
        fs::read_to_string(&csproj).unwrap(),
        "<Project><Name>orders-app</Name></Project>"
    );
    assert_eq!(fs::read_to_string(&nuget).unwrap(), "<configuration />");
    assert!(fs::read_to_string(&test_class).unwrap().contains("public class smoke_run"));

    // An existing project file is left alone; nuget.config is rewritten.
    fs::write(&csproj, "customized").unwrap();
    fs::write(&nuget, "stale").unwrap();
    let second = UnitTestPaths::new(&dir.path().join("orders-app"), "order-flow", None);
    let written = scaffold_unit_test(&second, "order-flow", "edge", &templates).unwrap();
    assert_eq!(
        written,
        vec![nuget.clone(), second.workflow_folder.join("edge").join("edge.cs")]
    );
    assert_eq!(fs::read_to_string(&csproj).unwrap(), "customized");
    assert_eq!(fs::read_to_string(&nuget).unwrap(), "<configuration />");
}

#[test]
fn test_scaffold_templates_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CSPROJ_TEMPLATE_FILE), "csproj").unwrap();
    fs::write(dir.path().join(TEST_CLASS_TEMPLATE_FILE), "class").unwrap();
    assert!(matches!(
        ScaffoldTemplates::from_dir(dir.path()),
        Err(UnitTestError::Io { .. })
    ));

    fs::write(dir.path().join(NUGET_CONFIG_TEMPLATE_FILE), "nuget").unwrap();
    let templates = ScaffoldTemplates::from_dir(dir.path()).unwrap();
    assert_eq!(templates.csproj, "csproj");
    assert_eq!(templates.test_class, "class");
    assert_eq!(templates.nuget_config, "nuget");
}
