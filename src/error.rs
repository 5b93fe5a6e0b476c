use thiserror::Error;

/// Errors that can occur while generating and writing mock output classes.
///
/// Malformed or partially-shaped schemas never produce one of these; the
/// generator degrades to empty classes instead. Only the definition document
/// itself and the filesystem can fail.
#[derive(Error, Debug, Clone)]
pub enum GenerateError {
    #[error("Failed to parse unit test definition JSON: {0}")]
    JsonParse(String),

    #[error("I/O error at '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors raised when a workflow run identifier is missing or malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunIdError {
    #[error("Run ID is required to generate a codeful unit test.")]
    Missing,

    #[error("Invalid runId format: '{0}'")]
    InvalidFormat(String),
}

/// Errors from unit test definition management (naming, saving, discovery).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitTestError {
    #[error("The unit test name cannot be empty.")]
    EmptyName,

    #[error(
        "Unit test name '{0}' must start with a letter and can only contain letters, digits, \"_\" and \"-\"."
    )]
    InvalidName(String),

    #[error("A unit test with the name \"{0}\" already exists.")]
    AlreadyExists(String),

    #[error("No unit test results found in '{0}'")]
    NoResults(String),

    #[error("Failed to parse unit test JSON: {0}")]
    JsonParse(String),

    #[error("I/O error at '{path}': {message}")]
    Io { path: String, message: String },
}
