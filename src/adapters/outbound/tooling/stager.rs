use super::connection::ToolingConnection;
use crate::shared::error::ExtractionError;
use crate::shared::Result;
use anyhow::Context;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;

/// ProjectStager lays out build files in a scratch directory
///
/// Build files may sit one directory below the root (as when a build is
/// nested under a module folder); the stager then treats that directory as
/// the project directory. Everything is removed when the stager drops.
pub struct ProjectStager {
    root: TempDir,
    project_dir: Option<PathBuf>,
}

impl ProjectStager {
    pub fn new() -> Result<Self> {
        let root = tempfile::Builder::new()
            .prefix("gradle-model-")
            .tempdir()
            .context("Failed to create staging directory")?;
        Ok(Self {
            root,
            project_dir: None,
        })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// The directory holding the build files, or the root when none
    /// were staged in a sub-directory.
    pub fn project_dir(&self) -> &Path {
        self.project_dir.as_deref().unwrap_or_else(|| self.root.path())
    }

    /// Writes `contents` at `relative_path` under the staging root.
    ///
    /// # Errors
    /// Rejects absolute paths and paths that climb out of the root.
    pub fn add_file(&mut self, relative_path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<&mut Self> {
        let relative_path = relative_path.as_ref();
        if relative_path.as_os_str().is_empty()
            || !relative_path
                .components()
                .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
        {
            return Err(ExtractionError::SecurityError {
                path: relative_path.to_path_buf(),
                reason: "Staged files must stay inside the staging directory".to_string(),
                hint: "Use a relative path without '..' components".to_string(),
            }
            .into());
        }

        let target = self.root.path().join(relative_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| ExtractionError::FileWriteError {
                path: parent.to_path_buf(),
                details: e.to_string(),
            })?;
        }
        fs::write(&target, contents).map_err(|e| ExtractionError::FileWriteError {
            path: target.clone(),
            details: e.to_string(),
        })?;

        if is_build_file(relative_path) {
            if let Some(parent) = target.parent() {
                if parent.parent() == Some(self.root.path()) {
                    self.project_dir = Some(parent.to_path_buf());
                }
            }
        }
        Ok(self)
    }

    /// A connection running `program` in the staged project directory.
    pub fn connect(&self, program: impl Into<OsString>) -> ToolingConnection {
        ToolingConnection::new(program, self.project_dir())
    }
}

fn is_build_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    name.ends_with(".gradle") || name.ends_with(".gradle.kts") || name == "gradle.properties"
}
