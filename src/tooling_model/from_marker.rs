use super::data::*;
use crate::dependency_model::domain::{
    ConfigurationMap, Dependency, GradleBuildscript, GradleDependencyConfiguration, GradleModel, GradleProject,
    GradleSettings, ResolvedNode,
};
use std::collections::BTreeMap;

/// Flattens a model into its tooling form.
pub fn from_marker(model: &GradleModel) -> GradleModelData {
    GradleModelData {
        gradle_project: project_data(model.gradle_project()),
        gradle_settings: model.gradle_settings().map(settings_data),
    }
}

pub fn project_data(project: &GradleProject) -> GradleProjectData {
    GradleProjectData {
        id: project.id(),
        group: project.group().map(str::to_string),
        name: project.name().to_string(),
        version: project.version().map(str::to_string),
        path: project.path().to_string(),
        plugins: project.plugins().iter().map(Into::into).collect(),
        maven_repositories: project.maven_repositories().iter().map(Into::into).collect(),
        maven_plugin_repositories: project.maven_plugin_repositories().iter().map(Into::into).collect(),
        name_to_configuration: configurations_data(project.name_to_configuration()),
    }
}

pub fn settings_data(settings: &GradleSettings) -> GradleSettingsData {
    GradleSettingsData {
        id: settings.id(),
        plugin_repositories: settings.plugin_repositories().iter().map(Into::into).collect(),
        plugins: settings.plugins().iter().map(Into::into).collect(),
        feature_previews: settings
            .feature_previews()
            .iter()
            .map(|(name, preview)| (name.clone(), preview.into()))
            .collect(),
        buildscript: buildscript_data(settings.buildscript()),
    }
}

pub fn buildscript_data(buildscript: &GradleBuildscript) -> GradleBuildscriptData {
    GradleBuildscriptData {
        id: buildscript.id(),
        maven_repositories: buildscript.maven_repositories().iter().map(Into::into).collect(),
        name_to_configuration: configurations_data(buildscript.name_to_configuration()),
    }
}

fn configurations_data(configurations: &ConfigurationMap) -> BTreeMap<String, GradleDependencyConfigurationData> {
    configurations
        .iter()
        .map(|c| (c.name().to_string(), configuration_data(c)))
        .collect()
}

pub fn configuration_data(configuration: &GradleDependencyConfiguration) -> GradleDependencyConfigurationData {
    let flags = configuration.flags();
    GradleDependencyConfigurationData {
        name: configuration.name().to_string(),
        description: configuration.description().map(str::to_string),
        is_transitive: flags.is_transitive,
        is_can_be_resolved: flags.is_can_be_resolved,
        is_can_be_consumed: flags.is_can_be_consumed,
        is_can_be_declared: flags.is_can_be_declared,
        extends_from: configuration.extends_from().to_vec(),
        requested: configuration.requested().iter().map(|d| dependency_data(d)).collect(),
        nodes: configuration.graph().nodes().map(resolved_data).collect(),
        direct_resolved: configuration
            .direct_resolved()
            .map(|node| node.gav().into())
            .collect(),
        constraints: configuration.constraints().iter().map(Into::into).collect(),
        exception_type: configuration.exception_type().map(str::to_string),
        message: configuration.message().map(str::to_string),
    }
}

pub fn dependency_data(dependency: &Dependency) -> DependencyData {
    DependencyData {
        gav: dependency.gav().as_ref().into(),
        scope: dependency.scope().to_string(),
        dependency_type: dependency.dependency_type().to_string(),
        classifier: dependency.classifier().map(str::to_string),
        exclusions: dependency.exclusions().iter().map(Into::into).collect(),
        optional: dependency.is_optional(),
    }
}

fn resolved_data(node: ResolvedNode<'_>) -> ResolvedDependencyData {
    ResolvedDependencyData {
        repository: node.repository().map(Into::into),
        gav: node.gav().into(),
        requested: dependency_data(node.requested()),
        dependencies: node.children().map(|child| child.gav().into()).collect(),
        licenses: node.licenses().to_vec(),
        depth: node.depth(),
    }
}
