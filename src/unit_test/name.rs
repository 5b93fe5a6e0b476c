use super::paths::UnitTestPaths;
use crate::error::UnitTestError;
use regex::Regex;
use std::sync::LazyLock;

static UNIT_TEST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z][a-z\d_-]*$").expect("Invalid regex"));

/// Checks that a unit test name starts with a letter and only contains
/// letters, digits, `_` and `-`.
pub fn validate_unit_test_name_format(name: &str) -> Result<(), UnitTestError> {
    if name.is_empty() {
        return Err(UnitTestError::EmptyName);
    }
    if !UNIT_TEST_NAME.is_match(name) {
        return Err(UnitTestError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Validates the format of a new unit test name and makes sure no definition
/// with that name exists yet for the workflow.
pub fn validate_unit_test_name(paths: &UnitTestPaths, name: &str) -> Result<(), UnitTestError> {
    validate_unit_test_name_format(name)?;
    if paths.unit_test_file(name).exists() {
        return Err(UnitTestError::AlreadyExists(name.to_string()));
    }
    Ok(())
}
