use crate::shared::error::ExtractionError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest snapshot or model file we are willing to load (256 MB).
///
/// Resolved graphs of large multi-project builds serialize to tens of
/// megabytes; anything far beyond that is almost certainly not a model.
pub const MAX_INPUT_SIZE: u64 = 256 * 1024 * 1024;

/// Rejects symbolic links without following them.
///
/// `operation` names what we were about to do ("read", "write") and is
/// only used in the error message.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ExtractionError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata before {}: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(ExtractionError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("Refusing to {} through a symbolic link", operation),
            hint: "Pass the real file path instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Reads a regular file after checking it is not a link, not a directory
/// and not larger than `max_size`.
///
/// # Errors
/// Returns [`ExtractionError::SecurityError`] for links and oversized files,
/// [`ExtractionError::FileReadError`] for everything else.
pub fn read_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<Vec<u8>> {
    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path).map_err(|e| ExtractionError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if !metadata.is_file() {
        return Err(ExtractionError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(ExtractionError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, maximum {} bytes)",
                file_description,
                metadata.len(),
                max_size
            ),
            hint: "Split the build into smaller snapshots".to_string(),
        }
        .into());
    }

    fs::read(path).map_err(|e| {
        ExtractionError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
