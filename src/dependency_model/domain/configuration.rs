use super::dependency::{Dependency, GradleDependencyConstraint};
use super::matching::matches_coordinates;
use super::resolved_graph::{NodeId, ResolvedGraph, ResolvedNode};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// The four boolean properties Gradle exposes on a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigurationFlags {
    pub is_transitive: bool,
    pub is_can_be_resolved: bool,
    pub is_can_be_consumed: bool,
    pub is_can_be_declared: bool,
}

impl Default for ConfigurationFlags {
    fn default() -> Self {
        Self {
            is_transitive: true,
            is_can_be_resolved: true,
            is_can_be_consumed: true,
            is_can_be_declared: true,
        }
    }
}

/// A named bucket of dependency declarations and, when resolvable, the
/// graph Gradle resolved for it.
///
/// When `exception_type` is set the resolved lists are not trustworthy;
/// the rest of the project is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleDependencyConfiguration {
    name: String,
    description: Option<String>,
    flags: ConfigurationFlags,
    /// Names of the configurations this one directly extends. Written once,
    /// by the builder, after every configuration of the project exists.
    extends_from: Vec<String>,
    requested: Vec<Arc<Dependency>>,
    graph: ResolvedGraph,
    direct_resolved: Vec<NodeId>,
    /// Transitive closure of `direct_resolved`.
    resolved: Vec<NodeId>,
    #[serde(default)]
    constraints: Vec<GradleDependencyConstraint>,
    exception_type: Option<String>,
    message: Option<String>,
}

impl GradleDependencyConfiguration {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        flags: ConfigurationFlags,
        requested: Vec<Arc<Dependency>>,
        graph: ResolvedGraph,
        direct_resolved: Vec<NodeId>,
    ) -> Self {
        let resolved = graph.transitive_closure(&direct_resolved);
        Self {
            name: name.into(),
            description,
            flags,
            extends_from: Vec::new(),
            requested,
            graph,
            direct_resolved,
            resolved,
            constraints: Vec::new(),
            exception_type: None,
            message: None,
        }
    }

    /// A configuration whose extraction blew up. Only identity and flags survive.
    pub fn failed(
        name: impl Into<String>,
        description: Option<String>,
        flags: ConfigurationFlags,
        exception_type: impl Into<String>,
        message: Option<String>,
    ) -> Self {
        Self::new(name, description, flags, Vec::new(), ResolvedGraph::new(), Vec::new())
            .with_failure(Some(exception_type.into()), message)
    }

    pub fn with_constraints(mut self, constraints: Vec<GradleDependencyConstraint>) -> Self {
        self.constraints = constraints;
        self
    }

    pub(crate) fn with_failure(mut self, exception_type: Option<String>, message: Option<String>) -> Self {
        self.exception_type = exception_type;
        self.message = message;
        self
    }

    pub(crate) fn link_extends_from(&mut self, parents: Vec<String>) {
        self.extends_from = parents;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn flags(&self) -> ConfigurationFlags {
        self.flags
    }

    pub fn is_transitive(&self) -> bool {
        self.flags.is_transitive
    }

    pub fn is_can_be_resolved(&self) -> bool {
        self.flags.is_can_be_resolved
    }

    pub fn is_can_be_consumed(&self) -> bool {
        self.flags.is_can_be_consumed
    }

    pub fn is_can_be_declared(&self) -> bool {
        self.flags.is_can_be_declared
    }

    pub fn extends_from(&self) -> &[String] {
        &self.extends_from
    }

    pub fn requested(&self) -> &[Arc<Dependency>] {
        &self.requested
    }

    pub fn graph(&self) -> &ResolvedGraph {
        &self.graph
    }

    pub fn direct_resolved_ids(&self) -> &[NodeId] {
        &self.direct_resolved
    }

    pub fn resolved_ids(&self) -> &[NodeId] {
        &self.resolved
    }

    /// First-level dependencies as selected by the resolver.
    pub fn direct_resolved(&self) -> impl Iterator<Item = ResolvedNode<'_>> {
        self.direct_resolved.iter().filter_map(|id| self.graph.node(*id))
    }

    /// Every resolved dependency, direct and transitive, each once.
    pub fn resolved(&self) -> impl Iterator<Item = ResolvedNode<'_>> {
        self.resolved.iter().filter_map(|id| self.graph.node(*id))
    }

    pub fn constraints(&self) -> &[GradleDependencyConstraint] {
        &self.constraints
    }

    pub fn exception_type(&self) -> Option<&str> {
        self.exception_type.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_resolution_failed(&self) -> bool {
        self.exception_type.is_some()
    }

    pub fn find_requested_dependency(&self, group_glob: &str, artifact_glob: &str) -> Option<&Dependency> {
        self.requested
            .iter()
            .map(Arc::as_ref)
            .find(|d| matches_coordinates(d.group_id(), d.artifact_id(), group_glob, artifact_glob))
    }

    /// Searches the whole resolved graph, not only first-level dependencies.
    pub fn find_resolved_dependency(&self, group_glob: &str, artifact_glob: &str) -> Option<ResolvedNode<'_>> {
        self.resolved()
            .find(|n| matches_coordinates(n.group_id(), n.artifact_id(), group_glob, artifact_glob))
    }
}

/// Configurations of one project (or buildscript), keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigurationMap(BTreeMap<String, GradleDependencyConfiguration>);

impl ConfigurationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&GradleDependencyConfiguration> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GradleDependencyConfiguration> {
        self.0.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub(crate) fn insert(&mut self, configuration: GradleDependencyConfiguration) {
        self.0.insert(configuration.name.clone(), configuration);
    }

    /// Installs `parents` as the extension list of `name`, keeping only
    /// parents that exist in this map. Returns the names that were dropped.
    pub(crate) fn link(&mut self, name: &str, parents: Vec<String>) -> Vec<String> {
        let (known, missing): (Vec<String>, Vec<String>) =
            parents.into_iter().partition(|p| self.0.contains_key(p));
        if let Some(configuration) = self.0.get_mut(name) {
            configuration.link_extends_from(known);
        }
        missing
    }

    pub fn extends_from(&self, configuration: &GradleDependencyConfiguration) -> Vec<&GradleDependencyConfiguration> {
        configuration
            .extends_from
            .iter()
            .filter_map(|parent| self.0.get(parent))
            .collect()
    }

    /// Ancestors of `configuration`, depth-first in declaration order, each once.
    ///
    /// Given `implementation <- testImplementation <- testCompileClasspath`,
    /// asking for `testCompileClasspath` yields `[testImplementation, implementation]`.
    pub fn all_extends_from<'a>(
        &'a self,
        configuration: &'a GradleDependencyConfiguration,
    ) -> Vec<&'a GradleDependencyConfiguration> {
        let mut seen = HashSet::from([configuration.name.as_str()]);
        let mut result = Vec::new();
        self.collect_ancestors(configuration, &mut seen, &mut result);
        result
    }

    fn collect_ancestors<'a>(
        &'a self,
        configuration: &'a GradleDependencyConfiguration,
        seen: &mut HashSet<&'a str>,
        result: &mut Vec<&'a GradleDependencyConfiguration>,
    ) {
        for parent in self.extends_from(configuration) {
            if seen.insert(parent.name.as_str()) {
                result.push(parent);
                self.collect_ancestors(parent, seen, result);
            }
        }
    }

    /// Constraints declared on `configuration` followed by inherited ones.
    pub fn all_constraints<'a>(
        &'a self,
        configuration: &'a GradleDependencyConfiguration,
    ) -> Vec<&'a GradleDependencyConstraint> {
        let mut seen = HashSet::new();
        std::iter::once(configuration)
            .chain(self.all_extends_from(configuration))
            .flat_map(|c| c.constraints.iter())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

impl FromIterator<GradleDependencyConfiguration> for ConfigurationMap {
    fn from_iter<I: IntoIterator<Item = GradleDependencyConfiguration>>(iter: I) -> Self {
        let mut map = Self::new();
        for configuration in iter {
            map.insert(configuration);
        }
        map
    }
}
