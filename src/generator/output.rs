use super::GeneratedMock;
use crate::error::GenerateError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const MOCK_OUTPUTS_FOLDER: &str = "MockOutputs";

pub(super) fn write_mocks(
    mocks: &[GeneratedMock],
    output_dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>, GenerateError> {
    fs::create_dir_all(output_dir).map_err(|e| io_error(output_dir, e))?;

    let mut written = Vec::with_capacity(mocks.len());
    for mock in mocks {
        let path = output_dir.join(mock.file_name(extension));
        fs::write(&path, &mock.source).map_err(|e| io_error(&path, e))?;
        info!("Created .{} file at: {}", extension, path.display());
        written.push(path);
    }
    Ok(written)
}

fn io_error(path: &Path, e: std::io::Error) -> GenerateError {
    GenerateError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
