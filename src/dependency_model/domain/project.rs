use super::configuration::{ConfigurationMap, GradleDependencyConfiguration};
use super::dependency::GradleDependencyConstraint;
use super::repository::{GradlePluginDescriptor, MavenRepository};
use super::resolved_graph::ResolvedNode;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length for a project path (security limit)
const MAX_PROJECT_PATH_LENGTH: usize = 1024;

/// NewType wrapper for a Gradle project path such as `:` or `:services:api`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectPath(String);

impl ProjectPath {
    pub fn new(path: String) -> Result<Self> {
        if !path.starts_with(':') {
            anyhow::bail!("Project path must start with ':' but was '{}'", path);
        }

        if path.len() > MAX_PROJECT_PATH_LENGTH {
            anyhow::bail!(
                "Project path is too long ({} bytes). Maximum allowed: {} bytes",
                path.len(),
                MAX_PROJECT_PATH_LENGTH
            );
        }

        if path.len() > 1 && path.split(':').skip(1).any(str::is_empty) {
            anyhow::bail!("Project path '{}' contains an empty segment", path);
        }

        Ok(Self(path))
    }

    pub fn root() -> Self {
        Self(":".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectPath {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ProjectPath> for String {
    fn from(path: ProjectPath) -> Self {
        path.0
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Project-level view of a Gradle build: identity, repositories, plugins
/// and every configuration by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleProject {
    id: Uuid,
    group: Option<String>,
    name: String,
    version: Option<String>,
    path: ProjectPath,
    plugins: Vec<GradlePluginDescriptor>,
    maven_repositories: Vec<MavenRepository>,
    maven_plugin_repositories: Vec<MavenRepository>,
    name_to_configuration: ConfigurationMap,
}

impl GradleProject {
    pub fn new(name: impl Into<String>, path: ProjectPath) -> Self {
        Self {
            id: Uuid::new_v4(),
            group: None,
            name: name.into(),
            version: None,
            path,
            plugins: Vec::new(),
            maven_repositories: Vec::new(),
            maven_plugin_repositories: Vec::new(),
            name_to_configuration: ConfigurationMap::new(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_group(mut self, group: Option<String>) -> Self {
        self.group = group;
        self
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn with_plugins(mut self, plugins: Vec<GradlePluginDescriptor>) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn with_maven_repositories(mut self, repositories: Vec<MavenRepository>) -> Self {
        self.maven_repositories = repositories;
        self
    }

    pub fn with_maven_plugin_repositories(mut self, repositories: Vec<MavenRepository>) -> Self {
        self.maven_plugin_repositories = repositories;
        self
    }

    pub fn with_configurations(mut self, configurations: ConfigurationMap) -> Self {
        self.name_to_configuration = configurations;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn path(&self) -> &ProjectPath {
        &self.path
    }

    pub fn plugins(&self) -> &[GradlePluginDescriptor] {
        &self.plugins
    }

    pub fn maven_repositories(&self) -> &[MavenRepository] {
        &self.maven_repositories
    }

    pub fn maven_plugin_repositories(&self) -> &[MavenRepository] {
        &self.maven_plugin_repositories
    }

    pub fn name_to_configuration(&self) -> &ConfigurationMap {
        &self.name_to_configuration
    }

    pub fn configuration(&self, name: &str) -> Option<&GradleDependencyConfiguration> {
        self.name_to_configuration.get(name)
    }

    pub fn configurations(&self) -> impl Iterator<Item = &GradleDependencyConfiguration> {
        self.name_to_configuration.iter()
    }

    /// Resolved dependency matching the globs in the named configuration.
    /// An unknown configuration finds nothing.
    pub fn find_dependency(
        &self,
        configuration: &str,
        group_glob: &str,
        artifact_glob: &str,
    ) -> Option<ResolvedNode<'_>> {
        self.configuration(configuration)?
            .find_resolved_dependency(group_glob, artifact_glob)
    }

    pub fn extends_from(&self, configuration: &GradleDependencyConfiguration) -> Vec<&GradleDependencyConfiguration> {
        self.name_to_configuration.extends_from(configuration)
    }

    pub fn all_extends_from<'a>(
        &'a self,
        configuration: &'a GradleDependencyConfiguration,
    ) -> Vec<&'a GradleDependencyConfiguration> {
        self.name_to_configuration.all_extends_from(configuration)
    }

    pub fn all_constraints<'a>(
        &'a self,
        configuration: &'a GradleDependencyConfiguration,
    ) -> Vec<&'a GradleDependencyConstraint> {
        self.name_to_configuration.all_constraints(configuration)
    }

    /// Configurations that recorded a resolution failure.
    pub fn failed_configurations(&self) -> impl Iterator<Item = &GradleDependencyConfiguration> {
        self.configurations().filter(|c| c.is_resolution_failed())
    }
}
