use super::configuration::ConfigurationMap;
use super::repository::{GradlePluginDescriptor, MavenRepository};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Incubating Gradle feature that can be switched on from `settings.gradle`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeaturePreview {
    pub name: String,
    pub is_active: bool,
    pub enabled: bool,
}

/// `buildscript { }` block of a project or settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleBuildscript {
    id: Uuid,
    maven_repositories: Vec<MavenRepository>,
    name_to_configuration: ConfigurationMap,
}

impl GradleBuildscript {
    pub fn new(maven_repositories: Vec<MavenRepository>, name_to_configuration: ConfigurationMap) -> Self {
        Self {
            id: Uuid::new_v4(),
            maven_repositories,
            name_to_configuration,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn maven_repositories(&self) -> &[MavenRepository] {
        &self.maven_repositories
    }

    pub fn name_to_configuration(&self) -> &ConfigurationMap {
        &self.name_to_configuration
    }
}

impl Default for GradleBuildscript {
    fn default() -> Self {
        Self::new(Vec::new(), ConfigurationMap::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleSettings {
    id: Uuid,
    plugin_repositories: Vec<MavenRepository>,
    plugins: Vec<GradlePluginDescriptor>,
    feature_previews: BTreeMap<String, FeaturePreview>,
    buildscript: GradleBuildscript,
}

impl GradleSettings {
    pub fn new(
        plugin_repositories: Vec<MavenRepository>,
        plugins: Vec<GradlePluginDescriptor>,
        feature_previews: BTreeMap<String, FeaturePreview>,
        buildscript: GradleBuildscript,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            plugin_repositories,
            plugins,
            feature_previews,
            buildscript,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn plugin_repositories(&self) -> &[MavenRepository] {
        &self.plugin_repositories
    }

    pub fn plugins(&self) -> &[GradlePluginDescriptor] {
        &self.plugins
    }

    pub fn feature_previews(&self) -> &BTreeMap<String, FeaturePreview> {
        &self.feature_previews
    }

    /// `None` when the preview is unknown to this Gradle version.
    pub fn is_feature_enabled(&self, name: &str) -> Option<bool> {
        self.feature_previews.get(name).map(|p| p.enabled)
    }

    pub fn buildscript(&self) -> &GradleBuildscript {
        &self.buildscript
    }
}
