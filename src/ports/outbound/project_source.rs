use crate::dependency_model::domain::{FeaturePreview, GradleDependencyConstraint};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the build host.
///
/// `exception_type` names the kind of failure the host raised (a class
/// name for a JVM host), so it survives into the model as data.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{exception_type}: {}", message.as_deref().unwrap_or("<no message>"))]
pub struct HostError {
    pub exception_type: String,
    pub message: Option<String>,
}

impl HostError {
    pub fn new(exception_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            exception_type: exception_type.into(),
            message: Some(message.into()),
        }
    }
}

/// Failure captured during lenient resolution of one configuration.
pub type ResolutionFailure = HostError;

pub type HostResult<T> = std::result::Result<T, HostError>;

/// Optional host features. Each flag defaults to `false`, and the builder
/// falls back to a neutral value for every missing feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostCapabilities {
    /// Settings-level `dependencyResolutionManagement` repositories exist.
    pub settings_repositories: bool,
    /// The host can map a plugin class back to its plugin id.
    pub plugin_ids: bool,
    /// Configurations report `isCanBeDeclared`.
    pub declarable_configurations: bool,
    pub feature_previews: bool,
}

/// A dependency as written in the build script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredDependency {
    /// `None` for file and project dependencies without a group.
    pub group: Option<String>,
    pub name: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryKind {
    Maven,
    Ivy,
    FlatDir,
    Other,
}

/// A repository as declared on the host, of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredRepository {
    pub name: Option<String>,
    pub kind: RepositoryKind,
    pub url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedPlugin {
    pub class_name: String,
    /// Only trusted when [`HostCapabilities::plugin_ids`] is set.
    #[serde(default)]
    pub id: Option<String>,
}

/// A module in the host's resolution result.
pub trait ResolvedModule {
    fn group(&self) -> &str;
    fn name(&self) -> &str;
    fn version(&self) -> &str;

    /// Configuration of the module that pulled this one in, when the host knows it.
    fn configuration(&self) -> Option<&str>;

    /// Selected children in host order. May lead back to an ancestor.
    fn children(&self) -> Vec<Box<dyn ResolvedModule + '_>>;
}

/// Outcome of resolving one configuration. A failed resolution may still
/// carry the first-level modules that did resolve.
pub struct Resolution<'a> {
    pub first_level: Vec<Box<dyn ResolvedModule + 'a>>,
    pub failure: Option<ResolutionFailure>,
}

impl<'a> Resolution<'a> {
    pub fn succeeded(first_level: Vec<Box<dyn ResolvedModule + 'a>>) -> Self {
        Self {
            first_level,
            failure: None,
        }
    }

    pub fn failed(first_level: Vec<Box<dyn ResolvedModule + 'a>>, failure: ResolutionFailure) -> Self {
        Self {
            first_level,
            failure: Some(failure),
        }
    }
}

/// Read-only view of one host configuration.
pub trait ConfigurationSource {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn is_transitive(&self) -> bool;
    fn is_can_be_resolved(&self) -> bool;
    fn is_can_be_consumed(&self) -> bool;

    /// Ignored unless [`HostCapabilities::declarable_configurations`] is set.
    fn is_can_be_declared(&self) -> bool {
        true
    }

    /// Names of the configurations this one directly extends.
    fn extends_from(&self) -> Vec<String>;

    /// Every dependency declared on this configuration, inherited ones included.
    fn declared_dependencies(&self) -> HostResult<Vec<DeclaredDependency>>;

    fn constraints(&self) -> HostResult<Vec<GradleDependencyConstraint>> {
        Ok(Vec::new())
    }

    /// Triggers resolution. `Err` means the host could not even attempt it.
    fn resolve(&self) -> HostResult<Resolution<'_>>;
}

/// Read-only view of the settings file.
pub trait SettingsSource {
    fn plugin_management_repositories(&self) -> Vec<DeclaredRepository>;
    fn dependency_resolution_repositories(&self) -> Vec<DeclaredRepository>;
    fn buildscript_repositories(&self) -> Vec<DeclaredRepository>;
    fn buildscript_configurations(&self) -> Vec<&dyn ConfigurationSource>;
    fn plugins(&self) -> Vec<AppliedPlugin>;
    fn feature_previews(&self) -> Vec<FeaturePreview>;
}

/// ProjectSource port for reading a build host's project state
///
/// This port abstracts the in-process object graph of the build tool so
/// that model extraction can run against a live build, a recorded
/// snapshot or a test double.
pub trait ProjectSource {
    fn name(&self) -> &str;
    fn group(&self) -> Option<&str>;
    fn version(&self) -> Option<&str>;

    /// Gradle path, `:` for the root project.
    fn path(&self) -> &str;

    fn capabilities(&self) -> HostCapabilities;
    fn repositories(&self) -> Vec<DeclaredRepository>;
    fn buildscript_repositories(&self) -> Vec<DeclaredRepository>;
    fn plugins(&self) -> Vec<AppliedPlugin>;

    /// All configurations in host order.
    fn configurations(&self) -> Vec<&dyn ConfigurationSource>;

    fn settings(&self) -> Option<&dyn SettingsSource>;
}
