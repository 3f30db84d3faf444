use super::data::*;
use crate::dependency_model::domain::{
    ConfigurationFlags, ConfigurationMap, Dependency, GradleBuildscript, GradleDependencyConfiguration,
    GradleModel, GradleProject, GradleSettings, GroupArtifactVersion, MavenRepository, NodeId,
    ProjectPath, ResolvedDependency, ResolvedGraph, ResolvedGroupArtifactVersion,
};
use crate::dependency_model::services::{DependencyInterner, MAX_EXPANSION_DEPTH};
use crate::shared::Result;
use anyhow::Context;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::warn;

/// Rebuilds a model from its tooling form.
///
/// Each call interns through its own [`DependencyInterner`], so nothing is
/// retained between calls.
pub fn to_marker(data: &GradleModelData) -> Result<GradleModel> {
    let interner = DependencyInterner::new();
    let project = project_to_marker(&data.gradle_project, &interner)?;
    let settings = data
        .gradle_settings
        .as_ref()
        .map(|settings| settings_to_marker(settings, &interner));
    Ok(GradleModel::new(project, settings))
}

pub fn project_to_marker(data: &GradleProjectData, interner: &DependencyInterner) -> Result<GradleProject> {
    let path = ProjectPath::new(data.path.clone())
        .with_context(|| format!("Invalid path for project '{}'", data.name))?;
    Ok(GradleProject::new(data.name.clone(), path)
        .with_id(data.id)
        .with_group(data.group.clone())
        .with_version(data.version.clone())
        .with_plugins(data.plugins.iter().map(Into::into).collect())
        .with_maven_repositories(repositories(&data.maven_repositories))
        .with_maven_plugin_repositories(repositories(&data.maven_plugin_repositories))
        .with_configurations(configurations_to_marker(&data.name_to_configuration, interner)))
}

pub fn settings_to_marker(data: &GradleSettingsData, interner: &DependencyInterner) -> GradleSettings {
    GradleSettings::new(
        repositories(&data.plugin_repositories),
        data.plugins.iter().map(Into::into).collect(),
        data.feature_previews
            .iter()
            .map(|(name, preview)| (name.clone(), preview.into()))
            .collect(),
        buildscript_to_marker(&data.buildscript, interner),
    )
    .with_id(data.id)
}

pub fn buildscript_to_marker(data: &GradleBuildscriptData, interner: &DependencyInterner) -> GradleBuildscript {
    GradleBuildscript::new(
        repositories(&data.maven_repositories),
        configurations_to_marker(&data.name_to_configuration, interner),
    )
    .with_id(data.id)
}

fn repositories(data: &[MavenRepositoryData]) -> Vec<MavenRepository> {
    data.iter().map(Into::into).collect()
}

/// Two passes: every configuration first, extension links second.
fn configurations_to_marker(
    data: &BTreeMap<String, GradleDependencyConfigurationData>,
    interner: &DependencyInterner,
) -> ConfigurationMap {
    let mut configurations: ConfigurationMap = data
        .values()
        .map(|conf| configuration_to_marker(conf, interner))
        .collect();
    for (name, conf) in data {
        if conf.extends_from.is_empty() {
            continue;
        }
        for missing in configurations.link(name, conf.extends_from.clone()) {
            warn!(configuration = %name, parent = %missing, "Dropping link to unknown parent configuration");
        }
    }
    configurations
}

pub fn configuration_to_marker(
    data: &GradleDependencyConfigurationData,
    interner: &DependencyInterner,
) -> GradleDependencyConfiguration {
    let flags = ConfigurationFlags {
        is_transitive: data.is_transitive,
        is_can_be_resolved: data.is_can_be_resolved,
        is_can_be_consumed: data.is_can_be_consumed,
        is_can_be_declared: data.is_can_be_declared,
    };
    let requested = data
        .requested
        .iter()
        .map(|d| Arc::new(dependency_to_marker(d, interner)))
        .collect();

    let mut mapper = ResolvedDependencyMapper::new(&data.name, &data.nodes, interner);
    for node in &data.nodes {
        mapper.map(&node.gav, 0);
    }
    let direct_resolved = data
        .direct_resolved
        .iter()
        .filter_map(|gav| mapper.map(gav, 0))
        .collect();

    GradleDependencyConfiguration::new(
        data.name.clone(),
        data.description.clone(),
        flags,
        requested,
        mapper.into_graph(),
        direct_resolved,
    )
    .with_constraints(data.constraints.iter().map(Into::into).collect())
    .with_failure(data.exception_type.clone(), data.message.clone())
}

pub fn dependency_to_marker(data: &DependencyData, interner: &DependencyInterner) -> Dependency {
    let gav = interner.intern_gav(GroupArtifactVersion::from(&data.gav));
    Dependency::new(gav, data.scope.clone())
        .with_type(data.dependency_type.clone())
        .with_classifier(data.classifier.clone())
        .with_exclusions(data.exclusions.iter().map(Into::into).collect())
        .with_optional(data.optional)
}

/// Rebuilds one configuration's arena from coordinate-linked nodes.
///
/// A node is registered before its children are mapped, so shared children
/// map to one node and a child pointing back up reuses its ancestor.
struct ResolvedDependencyMapper<'d, 'i> {
    configuration: &'d str,
    by_gav: HashMap<&'d ResolvedGroupArtifactVersionData, &'d ResolvedDependencyData>,
    interner: &'i DependencyInterner,
    graph: ResolvedGraph,
    cache: HashMap<&'d ResolvedGroupArtifactVersionData, NodeId>,
}

impl<'d, 'i> ResolvedDependencyMapper<'d, 'i> {
    fn new(configuration: &'d str, nodes: &'d [ResolvedDependencyData], interner: &'i DependencyInterner) -> Self {
        let mut by_gav = HashMap::new();
        for node in nodes {
            by_gav.entry(&node.gav).or_insert(node);
        }
        Self {
            configuration,
            by_gav,
            interner,
            graph: ResolvedGraph::new(),
            cache: HashMap::new(),
        }
    }

    fn into_graph(self) -> ResolvedGraph {
        self.graph
    }

    fn map(&mut self, gav: &'d ResolvedGroupArtifactVersionData, hops: u32) -> Option<NodeId> {
        if let Some(id) = self.cache.get(gav) {
            return Some(*id);
        }
        let Some(data) = self.by_gav.get(gav).copied() else {
            warn!(
                configuration = self.configuration,
                dependency = %format!("{}:{}:{}", gav.group_id, gav.artifact_id, gav.version),
                "Resolved dependency refers to a node that is not part of the configuration"
            );
            return None;
        };

        let node = ResolvedDependency::new(
            self.interner
                .intern_resolved_gav(ResolvedGroupArtifactVersion::from(&data.gav)),
            Arc::new(dependency_to_marker(&data.requested, self.interner)),
            data.depth,
        )
        .with_repository(data.repository.as_ref().map(Into::into))
        .with_licenses(data.licenses.clone());
        let id = self.graph.push(node);
        self.cache.insert(gav, id);

        if hops >= MAX_EXPANSION_DEPTH {
            warn!(
                configuration = self.configuration,
                "Maximum expansion depth ({}) reached while decoding. Dependency tree is truncated.",
                MAX_EXPANSION_DEPTH
            );
            return Some(id);
        }
        for child in &data.dependencies {
            if let Some(child_id) = self.map(child, hops + 1) {
                self.graph.push_child(id, child_id);
            }
        }
        Some(id)
    }
}
