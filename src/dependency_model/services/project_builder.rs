use super::configuration_builder::ConfigurationBuilder;
use super::interner::DependencyInterner;
use crate::dependency_model::domain::{
    unspecified_to_none, FeaturePreview, GradleBuildscript, GradleModel, GradlePluginDescriptor,
    GradleProject, GradleSettings, MavenRepository, ProjectPath,
};
use crate::dependency_model::policies::ResolutionPolicy;
use crate::ports::outbound::{
    AppliedPlugin, DeclaredRepository, HostCapabilities, ProjectSource, RepositoryKind, SettingsSource,
};
use crate::shared::Result;
use anyhow::Context;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Keeps Maven-layout repositories with a URL. Ivy, flat-dir and other
/// repository kinds have no counterpart in the model.
pub fn map_repositories(repositories: &[DeclaredRepository]) -> Vec<MavenRepository> {
    repositories
        .iter()
        .filter(|repo| repo.kind == RepositoryKind::Maven)
        .filter_map(|repo| {
            let uri = repo.url.clone()?;
            Some(MavenRepository::from_parts(
                repo.name.clone(),
                uri,
                Some("true".to_string()),
                Some("true".to_string()),
                true,
                repo.username.clone(),
                repo.password.clone(),
                None,
            ))
        })
        .collect()
}

/// Plugin ids are only trusted when the host can look them up.
pub fn plugin_descriptors(plugins: Vec<AppliedPlugin>, capabilities: HostCapabilities) -> Vec<GradlePluginDescriptor> {
    plugins
        .into_iter()
        .map(|plugin| {
            let id = if capabilities.plugin_ids { plugin.id } else { None };
            GradlePluginDescriptor::new(plugin.class_name, id)
        })
        .collect()
}

fn push_unique(target: &mut Vec<MavenRepository>, repositories: Vec<MavenRepository>) {
    for repository in repositories {
        if !target.contains(&repository) {
            target.push(repository);
        }
    }
}

/// GradleProjectBuilder assembles a [`GradleModel`] from a project source
///
/// Configurations go through [`ConfigurationBuilder`]; this type adds the
/// project identity, repositories, plugins and, optionally, settings.
pub struct GradleProjectBuilder<'a> {
    interner: &'a DependencyInterner,
    policy: &'a ResolutionPolicy,
}

impl<'a> GradleProjectBuilder<'a> {
    pub fn new(interner: &'a DependencyInterner, policy: &'a ResolutionPolicy) -> Self {
        Self { interner, policy }
    }

    /// # Errors
    /// Returns an error only when the project identity is malformed.
    /// Configuration failures are recorded on the model.
    pub fn build_model<F>(&self, source: &dyn ProjectSource, include_settings: bool, on_configuration: F) -> Result<GradleModel>
    where
        F: FnMut(usize, usize, &str),
    {
        let project = self.build_project(source, on_configuration)?;
        let settings = match source.settings() {
            Some(settings) if include_settings => Some(
                GradleSettingsBuilder::new(self.interner, self.policy).build(settings, source.capabilities()),
            ),
            _ => None,
        };
        Ok(GradleModel::new(project, settings))
    }

    pub fn build_project<F>(&self, source: &dyn ProjectSource, on_configuration: F) -> Result<GradleProject>
    where
        F: FnMut(usize, usize, &str),
    {
        let capabilities = source.capabilities();
        let path = ProjectPath::new(source.path().to_string())
            .with_context(|| format!("Invalid path for project '{}'", source.name()))?;
        debug!(project = %path, ?capabilities, "Building project model");

        let mut repositories = source.repositories();
        if capabilities.settings_repositories {
            if let Some(settings) = source.settings() {
                repositories.extend(settings.dependency_resolution_repositories());
            }
        }

        let configurations = ConfigurationBuilder::new(self.interner, self.policy, capabilities)
            .build_all(&source.configurations(), on_configuration);

        let failed = configurations.iter().filter(|c| c.is_resolution_failed()).count();
        info!(
            project = %path,
            configurations = configurations.len(),
            failed,
            "Built project model"
        );

        Ok(GradleProject::new(source.name(), path)
            .with_group(unspecified_to_none(source.group()))
            .with_version(unspecified_to_none(source.version()))
            .with_plugins(plugin_descriptors(source.plugins(), capabilities))
            .with_maven_repositories(map_repositories(&repositories))
            .with_maven_plugin_repositories(Self::plugin_repositories(source))
            .with_configurations(configurations))
    }

    /// Settings plugin management, then settings buildscript, then project
    /// buildscript. Falls back to the Gradle Plugin Portal.
    fn plugin_repositories(source: &dyn ProjectSource) -> Vec<MavenRepository> {
        let mut repositories = Vec::new();
        if let Some(settings) = source.settings() {
            push_unique(&mut repositories, map_repositories(&settings.plugin_management_repositories()));
            push_unique(&mut repositories, map_repositories(&settings.buildscript_repositories()));
        }
        push_unique(&mut repositories, map_repositories(&source.buildscript_repositories()));
        if repositories.is_empty() {
            repositories.push(MavenRepository::gradle_plugin_portal());
        }
        repositories
    }
}

/// GradleSettingsBuilder reads the settings file of a build
pub struct GradleSettingsBuilder<'a> {
    interner: &'a DependencyInterner,
    policy: &'a ResolutionPolicy,
}

impl<'a> GradleSettingsBuilder<'a> {
    pub fn new(interner: &'a DependencyInterner, policy: &'a ResolutionPolicy) -> Self {
        Self { interner, policy }
    }

    pub fn build(&self, settings: &dyn SettingsSource, capabilities: HostCapabilities) -> GradleSettings {
        let buildscript_repositories = map_repositories(&settings.buildscript_repositories());
        let configurations = ConfigurationBuilder::new(self.interner, self.policy, capabilities)
            .build_all(&settings.buildscript_configurations(), |_, _, _| {});

        let feature_previews: BTreeMap<String, FeaturePreview> = if capabilities.feature_previews {
            settings
                .feature_previews()
                .into_iter()
                .map(|preview| (preview.name.clone(), preview))
                .collect()
        } else {
            BTreeMap::new()
        };

        GradleSettings::new(
            buildscript_repositories.clone(),
            plugin_descriptors(settings.plugins(), capabilities),
            feature_previews,
            GradleBuildscript::new(buildscript_repositories, configurations),
        )
    }
}
