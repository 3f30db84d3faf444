use super::coordinates::{GroupArtifact, GroupArtifactVersion};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Packaging recorded for every dependency read from Gradle.
pub const DEFAULT_TYPE: &str = "jar";

/// A dependency as declared (requested) on a configuration, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    gav: Arc<GroupArtifactVersion>,
    scope: String,
    #[serde(rename = "type")]
    dependency_type: String,
    classifier: Option<String>,
    exclusions: Vec<GroupArtifact>,
    optional: bool,
}

impl Dependency {
    /// A plain `jar` dependency with no exclusions, the shape Gradle declarations map to.
    pub fn new(gav: Arc<GroupArtifactVersion>, scope: impl Into<String>) -> Self {
        Self {
            gav,
            scope: scope.into(),
            dependency_type: DEFAULT_TYPE.to_string(),
            classifier: None,
            exclusions: Vec::new(),
            optional: false,
        }
    }

    pub fn with_type(mut self, dependency_type: impl Into<String>) -> Self {
        self.dependency_type = dependency_type.into();
        self
    }

    pub fn with_classifier(mut self, classifier: Option<String>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<GroupArtifact>) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn gav(&self) -> &Arc<GroupArtifactVersion> {
        &self.gav
    }

    pub fn group_id(&self) -> &str {
        self.gav.group_id()
    }

    pub fn artifact_id(&self) -> &str {
        self.gav.artifact_id()
    }

    pub fn version(&self) -> Option<&str> {
        self.gav.version()
    }

    /// Name of the configuration that requested this dependency.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn dependency_type(&self) -> &str {
        &self.dependency_type
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn exclusions(&self) -> &[GroupArtifact] {
        &self.exclusions
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn group_artifact(&self) -> GroupArtifact {
        self.gav.group_artifact()
    }
}

/// License attached to a resolved module. Gradle never reports these, so
/// models built from a live build carry empty license lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: Option<String>,
}

/// A `constraints { }` entry declared on a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradleDependencyConstraint {
    pub group_id: String,
    pub artifact_id: String,
    pub required_version: Option<String>,
    pub preferred_version: Option<String>,
    pub strict_version: Option<String>,
    pub branch: Option<String>,
    pub reason: Option<String>,
    #[serde(default)]
    pub rejected_versions: Vec<String>,
}

impl GradleDependencyConstraint {
    pub fn group_artifact(&self) -> GroupArtifact {
        GroupArtifact::new(self.group_id.clone(), self.artifact_id.clone())
    }
}
