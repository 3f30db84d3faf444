use crate::dependency_model::domain::GradleModel;
use crate::ports::outbound::ModelConnection;
use crate::shared::error::ExtractionError;
use crate::shared::Result;
use crate::tooling_model::codec;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// File name of the init script dropped into the project directory.
pub const INIT_SCRIPT_NAME: &str = "gradle-model-tooling.gradle";

/// Init script registering the model builder plugin. The plugin writes the
/// encoded model to stdout once the build has been configured.
pub const DEFAULT_INIT_SCRIPT: &str = r#"initscript {
    repositories {
        mavenLocal()
        gradlePluginPortal()
    }
    dependencies {
        classpath "org.openrewrite.gradle.tooling:plugin:latest.release"
    }
}

allprojects {
    apply plugin: org.openrewrite.gradle.toolingapi.ToolingApiOpenRewriteModelPlugin
}
"#;

/// Longest stderr excerpt carried in a transport error.
const MAX_STDERR_EXCERPT: usize = 4096;

/// ToolingConnection adapter fetching a model from a build helper process
///
/// Writes [`INIT_SCRIPT_NAME`] into the project directory, runs
/// `program [args..] --init-script <file>` there and decodes its stdout.
/// The init script is removed again whether the helper succeeds or not.
#[derive(Debug, Clone)]
pub struct ToolingConnection {
    program: OsString,
    args: Vec<OsString>,
    project_dir: PathBuf,
    init_script: String,
}

impl ToolingConnection {
    pub fn new(program: impl Into<OsString>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            project_dir: project_dir.into(),
            init_script: DEFAULT_INIT_SCRIPT.to_string(),
        }
    }

    /// Arguments passed before `--init-script`, e.g. the task to run.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_init_script(mut self, contents: impl Into<String>) -> Self {
        self.init_script = contents.into();
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn transport_error(&self, details: String) -> anyhow::Error {
        ExtractionError::Transport {
            project_dir: self.project_dir.clone(),
            details,
        }
        .into()
    }

    fn run_helper(&self) -> Result<Vec<u8>> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg("--init-script")
            .arg(INIT_SCRIPT_NAME)
            .current_dir(&self.project_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                self.transport_error(format!(
                    "Failed to start {}: {}",
                    Path::new(&self.program).display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let excerpt: String = stderr.chars().take(MAX_STDERR_EXCERPT).collect();
            return Err(self.transport_error(format!(
                "{} exited with {}\n{}",
                Path::new(&self.program).display(),
                output.status,
                excerpt.trim_end()
            )));
        }

        debug!(bytes = output.stdout.len(), "Helper produced model");
        Ok(output.stdout)
    }
}

impl ModelConnection for ToolingConnection {
    fn fetch_model(&self) -> Result<GradleModel> {
        if !self.project_dir.is_dir() {
            return Err(ExtractionError::InvalidProjectPath {
                path: self.project_dir.clone(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }

        let _guard = InitScriptGuard::write(&self.project_dir, &self.init_script)
            .map_err(|e| self.transport_error(format!("Failed to write init script: {}", e)))?;
        let bytes = self.run_helper()?;
        codec::decode(&bytes)
    }
}

/// Owns the init script file and deletes it on drop.
struct InitScriptGuard {
    path: PathBuf,
}

impl InitScriptGuard {
    fn write(project_dir: &Path, contents: &str) -> std::io::Result<Self> {
        let path = project_dir.join(INIT_SCRIPT_NAME);
        fs::write(&path, contents)?;
        Ok(Self { path })
    }
}

impl Drop for InitScriptGuard {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "Failed to delete init script");
        }
    }
}
