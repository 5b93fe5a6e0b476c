use clap::{Parser, Subcommand};
use mockgen::generator::MockGenerator;
use mockgen::operation::UnitTestDefinition;
use mockgen::unit_test::{
    ScaffoldTemplates, UnitTestPaths, discover_unit_tests, extract_and_validate_run_id,
    latest_unit_test_result, save_unit_test_definition, scaffold_unit_test,
    validate_unit_test_name, validate_unit_test_name_format,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Generates typed mock output classes for Logic Apps workflow unit tests
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one mock output class file per mockable operation
    Generate {
        /// Path to the unit test definition JSON file
        definition: PathBuf,
        /// Workflow test folder that receives the MockOutputs folder
        #[arg(short, long)]
        workflow_folder: PathBuf,
        /// Logic app name, used for the generated namespace
        #[arg(short, long)]
        logic_app: String,
        /// Override the C# type for a schema type tag, e.g. `date-time=DateTimeOffset`
        #[arg(long = "type-map", value_parser = parse_type_mapping)]
        type_map: Vec<(String, String)>,
        /// Name of the output folder under the workflow folder
        #[arg(long, default_value = "MockOutputs")]
        output_folder: String,
        /// Extension of the generated files
        #[arg(long, default_value = "cs")]
        extension: String,
        /// Print the generated sources instead of writing them
        #[arg(long)]
        dry_run: bool,
        /// Print the class definition trees as JSON
        #[arg(long)]
        dump_classes: bool,
    },
    /// Extract and validate a workflow run identifier
    ValidateRunId {
        /// A run identifier or a `/workflows/<name>/runs/<id>` resource path
        run_id: Option<String>,
    },
    /// Validate a new unit test name and save its definition
    Save {
        /// Path to the logic app project
        #[arg(short, long)]
        project: PathBuf,
        /// Workflow name
        #[arg(short, long)]
        workflow: String,
        /// Unit test name
        #[arg(short, long)]
        name: String,
        /// Path to the unit test definition JSON to save
        definition: PathBuf,
    },
    /// Create the test project files and the test class for a unit test
    Scaffold {
        /// Path to the logic app project
        #[arg(short, long)]
        project: PathBuf,
        /// Workflow name
        #[arg(short, long)]
        workflow: String,
        /// Unit test name
        #[arg(short, long)]
        name: String,
        /// Folder holding the TestProjectFile, TestClassFile and TestNugetConfig templates
        #[arg(short, long)]
        templates: PathBuf,
    },
    /// List saved unit test definitions below a folder
    List {
        /// Folder to search
        root: PathBuf,
    },
    /// Show the most recent unit test result in a results folder
    Latest {
        /// Folder containing unit test result files
        results_dir: PathBuf,
    },
}

fn parse_type_mapping(raw: &str) -> Result<(String, String), String> {
    let (tag, csharp_type) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected TAG=TYPE, got '{}'", raw))?;
    if tag.trim().is_empty() || csharp_type.trim().is_empty() {
        return Err(format!("expected TAG=TYPE, got '{}'", raw));
    }
    Ok((tag.trim().to_string(), csharp_type.trim().to_string()))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            definition,
            workflow_folder,
            logic_app,
            type_map,
            output_folder,
            extension,
            dry_run,
            dump_classes,
        } => {
            let mut builder = MockGenerator::builder(&logic_app)
                .with_output_folder(&output_folder)
                .with_file_extension(&extension);
            for (tag, csharp_type) in &type_map {
                builder = builder.with_type_mapping(tag, csharp_type);
            }
            run_generate(
                definition,
                workflow_folder,
                builder.build(),
                dry_run,
                dump_classes,
            );
        }
        Command::ValidateRunId { run_id } => {
            match extract_and_validate_run_id(run_id.as_deref()) {
                Ok(id) => println!("{}", id),
                Err(e) => exit_with_error(&e.to_string()),
            }
        }
        Command::Save {
            project,
            workflow,
            name,
            definition,
        } => run_save(project, workflow, name, definition),
        Command::Scaffold {
            project,
            workflow,
            name,
            templates,
        } => run_scaffold(project, workflow, name, templates),
        Command::List { root } => {
            let unit_tests = discover_unit_tests(&root);
            if unit_tests.is_empty() {
                println!("No unit tests found under '{}'", root.display());
            }
            for (label, path) in unit_tests {
                println!("{}\t{}", label, path.display());
            }
        }
        Command::Latest { results_dir } => match latest_unit_test_result(&results_dir) {
            Ok((label, data)) => {
                println!("{}", label);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&data).unwrap_or_else(|e| exit_with_error(
                        &format!("Failed to render result: {}", e)
                    ))
                );
            }
            Err(e) => exit_with_error(&e.to_string()),
        },
    }
}

fn load_definition(path: &Path) -> UnitTestDefinition {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read definition file '{}': {}",
            path.display(),
            e
        ))
    });
    UnitTestDefinition::from_json(&json).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn run_generate(
    definition_path: PathBuf,
    workflow_folder: PathBuf,
    generator: MockGenerator,
    dry_run: bool,
    dump_classes: bool,
) {
    let start = Instant::now();
    let definition = load_definition(&definition_path);

    if dry_run || dump_classes {
        let mocks = generator.render(&definition);
        for mock in &mocks {
            if dump_classes {
                let tree = serde_json::to_string_pretty(&mock.definition).unwrap_or_else(|e| {
                    exit_with_error(&format!("Failed to render class tree: {}", e))
                });
                println!("{}", tree);
            }
            if dry_run {
                println!("// ---- {} ----", mock.file_name(generator.file_extension()));
                println!("{}", mock.source);
            }
        }
        if dry_run {
            println!(
                "\n{} mockable operation(s) rendered in {:?}",
                mocks.len(),
                start.elapsed()
            );
            return;
        }
    }

    let written = generator
        .write(&definition, &workflow_folder)
        .unwrap_or_else(|e| exit_with_error(&format!("Mock generation failed: {}", e)));
    println!(
        "Generated {} mock output file(s) for '{}' in {:?}",
        written.len(),
        generator.logic_app_name(),
        start.elapsed()
    );
}

fn run_save(project: PathBuf, workflow: String, name: String, definition_path: PathBuf) {
    let paths = UnitTestPaths::new(&project, &workflow, None);
    if let Err(e) = validate_unit_test_name(&paths, &name) {
        exit_with_error(&e.to_string());
    }
    let definition = load_definition(&definition_path);
    let saved = save_unit_test_definition(&paths, &name, &definition)
        .unwrap_or_else(|e| exit_with_error(&format!("Unit Test Definition not saved. {}", e)));
    println!("Saved unit test '{}' to '{}'", name, saved.display());
}

fn run_scaffold(project: PathBuf, workflow: String, name: String, templates_dir: PathBuf) {
    if let Err(e) = validate_unit_test_name_format(&name) {
        exit_with_error(&e.to_string());
    }
    let templates = ScaffoldTemplates::from_dir(&templates_dir)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load templates: {}", e)));
    let paths = UnitTestPaths::new(&project, &workflow, Some(&name));
    let written = scaffold_unit_test(&paths, &workflow, &name, &templates)
        .unwrap_or_else(|e| exit_with_error(&format!("Scaffolding failed: {}", e)));
    for path in &written {
        println!("{}", path.display());
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
