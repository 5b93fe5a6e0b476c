use super::paths::{UNIT_TEST_FILE_SUFFIX, UnitTestPaths};
use crate::error::UnitTestError;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Writes a unit test definition as 4-space indented JSON to
/// `<workflow_folder>/<name>.unit-test.json`, creating folders as needed.
pub fn save_unit_test_definition<T: Serialize>(
    paths: &UnitTestPaths,
    unit_test_name: &str,
    definition: &T,
) -> Result<PathBuf, UnitTestError> {
    fs::create_dir_all(&paths.workflow_folder).map_err(|e| io_error(&paths.workflow_folder, e))?;

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    definition
        .serialize(&mut serializer)
        .map_err(|e| UnitTestError::JsonParse(e.to_string()))?;

    let path = paths.unit_test_file(unit_test_name);
    fs::write(&path, buf).map_err(|e| io_error(&path, e))?;
    info!("Saved unit test definition at: {}", path.display());
    Ok(path)
}

/// The unit test name of a definition or result file: its file name up to
/// the first `.`.
pub fn unit_test_name_from_path(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .and_then(|n| n.split('.').next().map(str::to_string))
        .unwrap_or_default()
}

/// Finds every saved unit test definition below `root`.
///
/// Each entry is labelled `"<directory relative to root> - <unit test name>"`.
/// Entries are sorted by label. A missing root yields no entries.
pub fn discover_unit_tests(root: &Path) -> Vec<(String, PathBuf)> {
    if !root.exists() {
        return Vec::new();
    }

    let mut found: Vec<(String, PathBuf)> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let file_name = entry.file_name().to_string_lossy();
            let name = file_name.strip_suffix(UNIT_TEST_FILE_SUFFIX)?.to_string();
            let dir = entry.path().parent()?;
            let relative = dir.strip_prefix(root).unwrap_or(dir);
            Some((
                format!("{} - {}", relative.display(), name),
                entry.path().to_path_buf(),
            ))
        })
        .collect();

    found.sort_by(|a, b| a.0.cmp(&b.0));
    found
}

/// Loads every result file in `results_dir`, labelled by unit test name and
/// sorted by label.
pub fn list_unit_test_results(results_dir: &Path) -> Result<Vec<(String, Value)>, UnitTestError> {
    let mut results = result_files(results_dir)?
        .into_iter()
        .map(|path| Ok((unit_test_name_from_path(&path), read_json(&path)?)))
        .collect::<Result<Vec<_>, UnitTestError>>()?;
    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}

/// Loads the result file whose name sorts last in `results_dir`.
pub fn latest_unit_test_result(results_dir: &Path) -> Result<(String, Value), UnitTestError> {
    let latest = result_files(results_dir)?
        .into_iter()
        .max_by(|a, b| a.file_name().cmp(&b.file_name()))
        .ok_or_else(|| UnitTestError::NoResults(results_dir.display().to_string()))?;
    Ok((unit_test_name_from_path(&latest), read_json(&latest)?))
}

fn result_files(results_dir: &Path) -> Result<Vec<PathBuf>, UnitTestError> {
    let entries = fs::read_dir(results_dir).map_err(|e| io_error(results_dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_error(results_dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

fn read_json(path: &Path) -> Result<Value, UnitTestError> {
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    serde_json::from_str(&text).map_err(|e| UnitTestError::JsonParse(e.to_string()))
}

fn io_error(path: &Path, e: std::io::Error) -> UnitTestError {
    UnitTestError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
