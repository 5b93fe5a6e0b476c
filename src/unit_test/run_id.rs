use crate::error::RunIdError;
use regex::Regex;
use std::sync::LazyLock;

// A run resource path such as `/workflows/<name>/runs/<id>`.
static RUN_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/workflows/[^/]+/runs/(.+)$").expect("Invalid regex"));

static RUN_ID_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]+$").expect("Invalid regex"));

/// Extracts a run identifier from user input and validates it.
///
/// Accepts either a bare identifier or a run resource path, in which case the
/// trailing identifier is extracted. Surrounding whitespace is trimmed after
/// the presence check, so whitespace-only input is reported as malformed.
pub fn extract_and_validate_run_id(run_id: Option<&str>) -> Result<String, RunIdError> {
    let run_id = run_id
        .filter(|id| !id.is_empty())
        .ok_or(RunIdError::Missing)?;

    let extracted = RUN_PATH
        .captures(run_id)
        .and_then(|caps| caps.get(1))
        .map_or(run_id, |m| m.as_str())
        .trim();

    validate_run_id(extracted)?;
    Ok(extracted.to_string())
}

/// A run identifier consists of upper-case ASCII letters and digits only.
pub fn validate_run_id(run_id: &str) -> Result<(), RunIdError> {
    if RUN_ID_FORMAT.is_match(run_id) {
        Ok(())
    } else {
        Err(RunIdError::InvalidFormat(run_id.to_string()))
    }
}
