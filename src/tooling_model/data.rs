//! Flat mirrors of the model used across process boundaries.
//!
//! Nothing here is shared or cyclic: resolved dependencies refer to their
//! children by coordinates, and each configuration lists every resolved
//! node exactly once.
use crate::dependency_model::domain::{
    FeaturePreview, GradleDependencyConstraint, GradlePluginDescriptor, GroupArtifact,
    GroupArtifactVersion, License, MavenRepository, ResolvedGroupArtifactVersion,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupArtifactData {
    pub group_id: String,
    pub artifact_id: String,
}

impl From<&GroupArtifact> for GroupArtifactData {
    fn from(ga: &GroupArtifact) -> Self {
        Self {
            group_id: ga.group_id().to_string(),
            artifact_id: ga.artifact_id().to_string(),
        }
    }
}

impl From<&GroupArtifactData> for GroupArtifact {
    fn from(data: &GroupArtifactData) -> Self {
        GroupArtifact::new(data.group_id.clone(), data.artifact_id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupArtifactVersionData {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
}

impl From<&GroupArtifactVersion> for GroupArtifactVersionData {
    fn from(gav: &GroupArtifactVersion) -> Self {
        Self {
            group_id: gav.group_id().to_string(),
            artifact_id: gav.artifact_id().to_string(),
            version: gav.version().map(str::to_string),
        }
    }
}

impl From<&GroupArtifactVersionData> for GroupArtifactVersion {
    fn from(data: &GroupArtifactVersionData) -> Self {
        GroupArtifactVersion::new(data.group_id.clone(), data.artifact_id.clone(), data.version.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedGroupArtifactVersionData {
    pub repository: Option<String>,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub dated_snapshot_version: Option<String>,
}

impl From<&ResolvedGroupArtifactVersion> for ResolvedGroupArtifactVersionData {
    fn from(gav: &ResolvedGroupArtifactVersion) -> Self {
        Self {
            repository: gav.repository().map(str::to_string),
            group_id: gav.group_id().to_string(),
            artifact_id: gav.artifact_id().to_string(),
            version: gav.version().to_string(),
            dated_snapshot_version: gav.dated_snapshot_version().map(str::to_string),
        }
    }
}

impl From<&ResolvedGroupArtifactVersionData> for ResolvedGroupArtifactVersion {
    fn from(data: &ResolvedGroupArtifactVersionData) -> Self {
        ResolvedGroupArtifactVersion::new(
            data.repository.clone(),
            data.group_id.clone(),
            data.artifact_id.clone(),
            data.version.clone(),
            data.dated_snapshot_version.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MavenRepositoryData {
    pub id: Option<String>,
    pub uri: String,
    pub releases: Option<String>,
    pub snapshots: Option<String>,
    pub known_to_exist: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub derive_metadata_if_missing: Option<bool>,
}

impl From<&MavenRepository> for MavenRepositoryData {
    fn from(repo: &MavenRepository) -> Self {
        Self {
            id: repo.id().map(str::to_string),
            uri: repo.uri().to_string(),
            releases: repo.releases().map(str::to_string),
            snapshots: repo.snapshots().map(str::to_string),
            known_to_exist: repo.is_known_to_exist(),
            username: repo.username().map(str::to_string),
            password: repo.password().map(str::to_string),
            derive_metadata_if_missing: repo.derive_metadata_if_missing(),
        }
    }
}

impl From<&MavenRepositoryData> for MavenRepository {
    fn from(data: &MavenRepositoryData) -> Self {
        MavenRepository::from_parts(
            data.id.clone(),
            data.uri.clone(),
            data.releases.clone(),
            data.snapshots.clone(),
            data.known_to_exist,
            data.username.clone(),
            data.password.clone(),
            data.derive_metadata_if_missing,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradlePluginDescriptorData {
    pub fully_qualified_class_name: String,
    pub id: Option<String>,
}

impl From<&GradlePluginDescriptor> for GradlePluginDescriptorData {
    fn from(plugin: &GradlePluginDescriptor) -> Self {
        Self {
            fully_qualified_class_name: plugin.fully_qualified_class_name().to_string(),
            id: plugin.id().map(str::to_string),
        }
    }
}

impl From<&GradlePluginDescriptorData> for GradlePluginDescriptor {
    fn from(data: &GradlePluginDescriptorData) -> Self {
        GradlePluginDescriptor::new(data.fully_qualified_class_name.clone(), data.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeaturePreviewData {
    pub name: String,
    pub is_active: bool,
    pub enabled: bool,
}

impl From<&FeaturePreview> for FeaturePreviewData {
    fn from(preview: &FeaturePreview) -> Self {
        Self {
            name: preview.name.clone(),
            is_active: preview.is_active,
            enabled: preview.enabled,
        }
    }
}

impl From<&FeaturePreviewData> for FeaturePreview {
    fn from(data: &FeaturePreviewData) -> Self {
        FeaturePreview {
            name: data.name.clone(),
            is_active: data.is_active,
            enabled: data.enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradleDependencyConstraintData {
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

impl From<&GradleDependencyConstraint> for GradleDependencyConstraintData {
    fn from(c: &GradleDependencyConstraint) -> Self {
        Self {
            group_id: c.group_id.clone(),
            artifact_id: c.artifact_id.clone(),
            required_version: c.required_version.clone(),
            preferred_version: c.preferred_version.clone(),
            strict_version: c.strict_version.clone(),
            branch: c.branch.clone(),
            reason: c.reason.clone(),
            rejected_versions: c.rejected_versions.clone(),
        }
    }
}

impl From<&GradleDependencyConstraintData> for GradleDependencyConstraint {
    fn from(data: &GradleDependencyConstraintData) -> Self {
        GradleDependencyConstraint {
            group_id: data.group_id.clone(),
            artifact_id: data.artifact_id.clone(),
            required_version: data.required_version.clone(),
            preferred_version: data.preferred_version.clone(),
            strict_version: data.strict_version.clone(),
            branch: data.branch.clone(),
            reason: data.reason.clone(),
            rejected_versions: data.rejected_versions.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyData {
    pub gav: GroupArtifactVersionData,
    pub scope: String,
    #[serde(rename = "type")]
    pub dependency_type: String,
    pub classifier: Option<String>,
    #[serde(default)]
    pub exclusions: Vec<GroupArtifactData>,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependencyData {
    pub repository: Option<MavenRepositoryData>,
    pub gav: ResolvedGroupArtifactVersionData,
    pub requested: DependencyData,
    /// Children by coordinates; each names another node of the same configuration.
    #[serde(default)]
    pub dependencies: Vec<ResolvedGroupArtifactVersionData>,
    #[serde(default)]
    pub licenses: Vec<License>,
    pub depth: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleDependencyConfigurationData {
    pub name: String,
    pub description: Option<String>,
    pub is_transitive: bool,
    pub is_can_be_resolved: bool,
    pub is_can_be_consumed: bool,
    pub is_can_be_declared: bool,
    #[serde(default)]
    pub extends_from: Vec<String>,
    #[serde(default)]
    pub requested: Vec<DependencyData>,
    /// Every resolved node of the configuration, each once.
    #[serde(default)]
    pub nodes: Vec<ResolvedDependencyData>,
    /// Coordinates of the first-level nodes, in resolver order.
    #[serde(default)]
    pub direct_resolved: Vec<ResolvedGroupArtifactVersionData>,
    #[serde(default)]
    pub constraints: Vec<GradleDependencyConstraintData>,
    pub exception_type: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleBuildscriptData {
    pub id: Uuid,
    pub maven_repositories: Vec<MavenRepositoryData>,
    pub name_to_configuration: BTreeMap<String, GradleDependencyConfigurationData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleSettingsData {
    pub id: Uuid,
    pub plugin_repositories: Vec<MavenRepositoryData>,
    pub plugins: Vec<GradlePluginDescriptorData>,
    pub feature_previews: BTreeMap<String, FeaturePreviewData>,
    pub buildscript: GradleBuildscriptData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleProjectData {
    pub id: Uuid,
    pub group: Option<String>,
    pub name: String,
    pub version: Option<String>,
    pub path: String,
    pub plugins: Vec<GradlePluginDescriptorData>,
    pub maven_repositories: Vec<MavenRepositoryData>,
    pub maven_plugin_repositories: Vec<MavenRepositoryData>,
    pub name_to_configuration: BTreeMap<String, GradleDependencyConfigurationData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleModelData {
    pub gradle_project: GradleProjectData,
    pub gradle_settings: Option<GradleSettingsData>,
}
