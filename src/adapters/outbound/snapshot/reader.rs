use super::schema::BuildSnapshot;
use crate::shared::error::ExtractionError;
use crate::shared::security::{read_regular_file, MAX_INPUT_SIZE};
use crate::shared::Result;
use std::path::Path;
use tracing::debug;

/// SnapshotReader loads a [`BuildSnapshot`] from YAML or JSON
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub struct SnapshotReader;

impl SnapshotReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> Result<BuildSnapshot> {
        if !path.exists() {
            return Err(ExtractionError::SnapshotNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "No build snapshot at \"{}\".\n   \
                     Record one from the build or pass the correct file with --snapshot.",
                    path.display()
                ),
            }
            .into());
        }

        let bytes = read_regular_file(path, "build snapshot", MAX_INPUT_SIZE)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        debug!(path = %path.display(), bytes = bytes.len(), is_json, "Parsing build snapshot");

        let parsed = std::str::from_utf8(&bytes)
            .map_err(|e| e.to_string())
            .and_then(|text| {
                if is_json {
                    serde_json::from_str(text).map_err(|e| e.to_string())
                } else {
                    serde_yaml_ng::from_str(text).map_err(|e| e.to_string())
                }
            });
        parsed.map_err(|details| {
            ExtractionError::SnapshotParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}

impl Default for SnapshotReader {
    fn default() -> Self {
        Self::new()
    }
}
