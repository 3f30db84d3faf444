use crate::dependency_model::domain::{FeaturePreview, GradleDependencyConstraint};
use crate::ports::outbound::{AppliedPlugin, DeclaredDependency, DeclaredRepository, HostCapabilities, HostError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn root_path() -> String {
    ":".to_string()
}

fn enabled() -> bool {
    true
}

/// Recorded state of one Gradle project, as the build host would report it.
///
/// Resolved modules live in one pool keyed by an arbitrary id so that
/// configurations can share them and modules can form cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSnapshot {
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default = "root_path")]
    pub path: String,
    #[serde(default)]
    pub capabilities: HostCapabilities,
    #[serde(default)]
    pub repositories: Vec<DeclaredRepository>,
    #[serde(default)]
    pub buildscript_repositories: Vec<DeclaredRepository>,
    #[serde(default)]
    pub plugins: Vec<AppliedPlugin>,
    #[serde(default)]
    pub configurations: Vec<ConfigurationSnapshot>,
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleSnapshot>,
    #[serde(default)]
    pub settings: Option<SettingsSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationSnapshot {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "enabled")]
    pub transitive: bool,
    #[serde(default)]
    pub can_be_resolved: bool,
    #[serde(default)]
    pub can_be_consumed: bool,
    #[serde(default = "enabled")]
    pub can_be_declared: bool,
    #[serde(default)]
    pub extends_from: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<DeclaredDependency>,
    #[serde(default)]
    pub constraints: Vec<GradleDependencyConstraint>,
    /// Ids of first-level modules in the module pool.
    #[serde(default)]
    pub resolved: Vec<String>,
    /// Lenient resolution failure; `resolved` still holds what did resolve.
    #[serde(default)]
    pub failure: Option<HostError>,
    /// The host threw while the configuration was being read.
    #[serde(default)]
    pub error: Option<HostError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSnapshot {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub configuration: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSnapshot {
    pub plugin_management_repositories: Vec<DeclaredRepository>,
    pub dependency_resolution_repositories: Vec<DeclaredRepository>,
    pub buildscript_repositories: Vec<DeclaredRepository>,
    pub buildscript_configurations: Vec<ConfigurationSnapshot>,
    pub plugins: Vec<AppliedPlugin>,
    pub feature_previews: Vec<FeaturePreview>,
}
