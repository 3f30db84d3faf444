use super::interner::DependencyInterner;
use crate::dependency_model::domain::{
    unspecified_to_none, ConfigurationFlags, ConfigurationMap, Dependency, GradleDependencyConfiguration,
    GroupArtifact, GroupArtifactVersion, NodeId, ResolvedDependency, ResolvedGraph,
    ResolvedGroupArtifactVersion,
};
use crate::dependency_model::policies::ResolutionPolicy;
use crate::ports::outbound::{
    ConfigurationSource, DeclaredDependency, HostCapabilities, HostError, HostResult, ResolvedModule,
};
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, warn};

/// Exception type recorded when the host panics while a configuration is read.
pub const PANIC_EXCEPTION_TYPE: &str = "panic";

/// Name recorded for a configuration whose name getter faulted.
pub const UNREADABLE_NAME: &str = "<unreadable>";

/// Maximum expansion depth of one resolved tree
/// Real graphs are far shallower; this only bounds a malformed host graph.
pub const MAX_EXPANSION_DEPTH: u32 = 512;

/// ConfigurationBuilder turns host configurations into model configurations
///
/// Each configuration is built independently. Anything that goes wrong
/// while reading or resolving one of them, a panic included, is recorded
/// on that configuration and the others are unaffected.
pub struct ConfigurationBuilder<'a> {
    interner: &'a DependencyInterner,
    policy: &'a ResolutionPolicy,
    capabilities: HostCapabilities,
}

impl<'a> ConfigurationBuilder<'a> {
    pub fn new(interner: &'a DependencyInterner, policy: &'a ResolutionPolicy, capabilities: HostCapabilities) -> Self {
        Self {
            interner,
            policy,
            capabilities,
        }
    }

    /// Builds every configuration, then links each to its parents.
    ///
    /// `on_configuration` is called before each configuration with its
    /// 1-based position, the total and its name. A configuration whose name
    /// cannot be read is skipped.
    pub fn build_all<F>(&self, sources: &[&dyn ConfigurationSource], mut on_configuration: F) -> ConfigurationMap
    where
        F: FnMut(usize, usize, &str),
    {
        let total = sources.len();
        let mut configurations = ConfigurationMap::new();
        for (index, source) in sources.iter().enumerate() {
            let name = match host_call(|| source.name().to_string()) {
                Ok(name) => name,
                Err(error) => {
                    warn!(
                        position = index + 1,
                        "Skipping configuration whose name cannot be read: {}", error
                    );
                    continue;
                }
            };
            on_configuration(index + 1, total, &name);
            configurations.insert(self.build_named(*source, &name));
        }
        link_extends_from(&mut configurations, sources);
        configurations
    }

    /// Builds one configuration. Never fails: errors become data.
    pub fn build(&self, source: &dyn ConfigurationSource) -> GradleDependencyConfiguration {
        match host_call(|| source.name().to_string()) {
            Ok(name) => self.build_named(source, &name),
            Err(error) => {
                warn!("Failed to read configuration name: {}", error);
                GradleDependencyConfiguration::failed(
                    UNREADABLE_NAME,
                    None,
                    ConfigurationFlags::default(),
                    error.exception_type,
                    error.message,
                )
            }
        }
    }

    /// Every host read, getters included, runs under the panic guard. When
    /// a getter faults, the values read so far are kept and the rest default.
    fn build_named(&self, source: &dyn ConfigurationSource, name: &str) -> GradleDependencyConfiguration {
        let mut description = None;
        let mut flags = ConfigurationFlags::default();
        let outcome = host_call(|| {
            description = source.description().map(str::to_string);
            flags = self.flags(source);
            self.try_build(source, name, description.clone(), flags)
        });
        let error = match outcome {
            Ok(Ok(configuration)) => return configuration,
            Ok(Err(error)) | Err(error) => error,
        };

        warn!(
            configuration = name,
            exception_type = %error.exception_type,
            "Failed to read configuration: {}",
            error.message.as_deref().unwrap_or("no message")
        );
        GradleDependencyConfiguration::failed(name, description, flags, error.exception_type, error.message)
    }

    fn flags(&self, source: &dyn ConfigurationSource) -> ConfigurationFlags {
        ConfigurationFlags {
            is_transitive: source.is_transitive(),
            is_can_be_resolved: source.is_can_be_resolved(),
            is_can_be_consumed: source.is_can_be_consumed(),
            is_can_be_declared: !self.capabilities.declarable_configurations || source.is_can_be_declared(),
        }
    }

    fn try_build(
        &self,
        source: &dyn ConfigurationSource,
        name: &str,
        description: Option<String>,
        flags: ConfigurationFlags,
    ) -> HostResult<GradleDependencyConfiguration> {
        let requested: Vec<Arc<Dependency>> = source
            .declared_dependencies()?
            .into_iter()
            .map(|declared| self.requested(declared, name))
            .collect();
        let constraints = source.constraints()?;

        let mut expander = GraphExpander::new(self.interner, name);
        let mut direct_resolved = Vec::new();
        let mut failure = None;

        if self.policy.should_resolve(name, flags.is_can_be_resolved) {
            let resolution = source.resolve()?;
            if let Some(failure) = &resolution.failure {
                warn!(
                    configuration = name,
                    exception_type = %failure.exception_type,
                    "Resolution failed, keeping {} first-level modules",
                    resolution.first_level.len()
                );
            }

            let ga_to_requested = self.index_requested(&requested);
            let mut seen = HashSet::new();
            for module in &resolution.first_level {
                let ga = self
                    .interner
                    .intern_group_artifact(GroupArtifact::new(module.group(), module.name()));
                if !seen.insert(Arc::clone(&ga)) {
                    continue;
                }
                let requested = match ga_to_requested.get(&ga) {
                    Some(requested) => Arc::clone(requested),
                    // Substituted or otherwise unmatched: approximate the request
                    // with the resolved coordinates.
                    None => self.interner.intern_requested(
                        GroupArtifactVersion::new(
                            module.group(),
                            module.name(),
                            unspecified_to_none(Some(module.version())),
                        ),
                        name,
                    ),
                };
                direct_resolved.push(expander.expand_root(module.as_ref(), requested));
            }
            failure = resolution.failure;
        } else {
            debug!(configuration = name, "Skipping resolution");
        }

        let (exception_type, message) = match failure {
            Some(failure) => (Some(failure.exception_type), failure.message),
            None => (None, None),
        };

        Ok(GradleDependencyConfiguration::new(
            name,
            description,
            flags,
            requested,
            expander.into_graph(),
            direct_resolved,
        )
        .with_constraints(constraints)
        .with_failure(exception_type, message))
    }

    fn requested(&self, declared: DeclaredDependency, scope: &str) -> Arc<Dependency> {
        let gav = GroupArtifactVersion::new(
            declared.group.unwrap_or_default(),
            declared.name,
            unspecified_to_none(declared.version.as_deref()),
        );
        self.interner.intern_requested(gav, scope)
    }

    /// First declaration of a group/artifact wins.
    fn index_requested(&self, requested: &[Arc<Dependency>]) -> HashMap<Arc<GroupArtifact>, Arc<Dependency>> {
        let mut index = HashMap::new();
        for dependency in requested {
            let ga = self.interner.intern_group_artifact(dependency.group_artifact());
            index.entry(ga).or_insert_with(|| Arc::clone(dependency));
        }
        index
    }
}

/// Installs extension links after every configuration exists. Parents
/// that were never built are dropped, and so is the parent list of a
/// configuration whose host getters fault.
pub fn link_extends_from(configurations: &mut ConfigurationMap, sources: &[&dyn ConfigurationSource]) {
    for source in sources {
        let (name, parents) = match host_call(|| (source.name().to_string(), source.extends_from())) {
            Ok(read) => read,
            Err(error) => {
                warn!("Failed to read extended configurations, leaving them unlinked: {}", error);
                continue;
            }
        };
        if parents.is_empty() {
            continue;
        }
        for parent in configurations.link(&name, parents) {
            debug!(configuration = %name, parent = %parent, "Dropping link to unknown parent configuration");
        }
    }
}

/// Expands one configuration's resolved modules into an arena. Nodes are
/// keyed by resolved coordinates and registered before their children are
/// visited, so a module seen twice is one node and cycles stop.
struct GraphExpander<'i> {
    interner: &'i DependencyInterner,
    configuration: &'i str,
    graph: ResolvedGraph,
    cache: HashMap<Arc<ResolvedGroupArtifactVersion>, NodeId>,
}

impl<'i> GraphExpander<'i> {
    fn new(interner: &'i DependencyInterner, configuration: &'i str) -> Self {
        Self {
            interner,
            configuration,
            graph: ResolvedGraph::new(),
            cache: HashMap::new(),
        }
    }

    fn into_graph(self) -> ResolvedGraph {
        self.graph
    }

    fn resolved_gav(&self, module: &dyn ResolvedModule) -> Arc<ResolvedGroupArtifactVersion> {
        self.interner.intern_resolved_gav(ResolvedGroupArtifactVersion::new(
            None,
            module.group(),
            module.name(),
            module.version(),
            None,
        ))
    }

    fn expand_root(&mut self, module: &dyn ResolvedModule, requested: Arc<Dependency>) -> NodeId {
        self.expand_with(module, 0, |_| requested)
    }

    fn expand(&mut self, module: &dyn ResolvedModule, depth: u32) -> NodeId {
        self.expand_with(module, depth, |expander| {
            let scope = module.configuration().unwrap_or(expander.configuration);
            expander.interner.intern_requested(
                GroupArtifactVersion::new(
                    module.group(),
                    module.name(),
                    unspecified_to_none(Some(module.version())),
                ),
                scope,
            )
        })
    }

    fn expand_with<F>(&mut self, module: &dyn ResolvedModule, depth: u32, requested: F) -> NodeId
    where
        F: FnOnce(&Self) -> Arc<Dependency>,
    {
        let gav = self.resolved_gav(module);
        if let Some(id) = self.cache.get(&gav) {
            return *id;
        }

        let requested = requested(self);
        let id = self
            .graph
            .push(ResolvedDependency::new(Arc::clone(&gav), requested, depth));
        self.cache.insert(Arc::clone(&gav), id);

        let child_depth = depth + 1;
        if child_depth > MAX_EXPANSION_DEPTH {
            warn!(
                configuration = self.configuration,
                module = %gav,
                "Maximum expansion depth ({}) reached. Dependency tree is truncated.",
                MAX_EXPANSION_DEPTH
            );
            return id;
        }

        for child in module.children() {
            let child_id = self.expand(child.as_ref(), child_depth);
            self.graph.push_child(id, child_id);
        }
        id
    }
}

/// Runs a host call, turning a panic into a [`HostError`].
fn host_call<T>(call: impl FnOnce() -> T) -> HostResult<T> {
    panic::catch_unwind(AssertUnwindSafe(call)).map_err(|payload| HostError {
        exception_type: PANIC_EXCEPTION_TYPE.to_string(),
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::Resolution;

    #[derive(Clone)]
    struct Module {
        group: &'static str,
        name: &'static str,
        version: &'static str,
        configuration: Option<&'static str>,
        children: Vec<Module>,
    }

    fn module(name: &'static str, version: &'static str, children: Vec<Module>) -> Module {
        Module {
            group: "org",
            name,
            version,
            configuration: None,
            children,
        }
    }

    impl ResolvedModule for Module {
        fn group(&self) -> &str {
            self.group
        }
        fn name(&self) -> &str {
            self.name
        }
        fn version(&self) -> &str {
            self.version
        }
        fn configuration(&self) -> Option<&str> {
            self.configuration
        }
        fn children(&self) -> Vec<Box<dyn ResolvedModule + '_>> {
            self.children
                .iter()
                .map(|c| Box::new(c.clone()) as Box<dyn ResolvedModule + '_>)
                .collect()
        }
    }

    /// Module whose children are itself, forever.
    struct SelfLoop;

    impl ResolvedModule for SelfLoop {
        fn group(&self) -> &str {
            "org"
        }
        fn name(&self) -> &str {
            "loop"
        }
        fn version(&self) -> &str {
            "1.0"
        }
        fn configuration(&self) -> Option<&str> {
            None
        }
        fn children(&self) -> Vec<Box<dyn ResolvedModule + '_>> {
            vec![Box::new(SelfLoop) as Box<dyn ResolvedModule + '_>]
        }
    }

    #[derive(Default)]
    struct Conf {
        name: &'static str,
        resolvable: bool,
        declared: Vec<DeclaredDependency>,
        first_level: Vec<Module>,
        failure: Option<HostError>,
        extends: Vec<String>,
        self_loop: bool,
        panics: bool,
        /// `description()` and `extends_from()` panic.
        faulty_getters: bool,
        nameless: bool,
    }

    impl ConfigurationSource for Conf {
        fn name(&self) -> &str {
            if self.nameless {
                panic!("name getter threw");
            }
            self.name
        }
        fn description(&self) -> Option<&str> {
            if self.faulty_getters {
                panic!("description getter threw");
            }
            None
        }
        fn is_transitive(&self) -> bool {
            true
        }
        fn is_can_be_resolved(&self) -> bool {
            self.resolvable
        }
        fn is_can_be_consumed(&self) -> bool {
            false
        }
        fn is_can_be_declared(&self) -> bool {
            false
        }
        fn extends_from(&self) -> Vec<String> {
            if self.faulty_getters {
                panic!("extendsFrom getter threw");
            }
            self.extends.clone()
        }
        fn declared_dependencies(&self) -> HostResult<Vec<DeclaredDependency>> {
            Ok(self.declared.clone())
        }
        fn resolve(&self) -> HostResult<Resolution<'_>> {
            if self.panics {
                panic!("resolver exploded");
            }
            let mut first_level: Vec<Box<dyn ResolvedModule + '_>> = self
                .first_level
                .iter()
                .map(|m| Box::new(m.clone()) as Box<dyn ResolvedModule + '_>)
                .collect();
            if self.self_loop {
                first_level.push(Box::new(SelfLoop));
            }
            Ok(Resolution {
                first_level,
                failure: self.failure.clone(),
            })
        }
    }

    /// Linear chain `m0 -> m1 -> ... -> m{len-1}`.
    struct Chain {
        index: u32,
        len: u32,
        name: String,
    }

    impl Chain {
        fn at(index: u32, len: u32) -> Self {
            Self {
                index,
                len,
                name: format!("m{}", index),
            }
        }
    }

    impl ResolvedModule for Chain {
        fn group(&self) -> &str {
            "org"
        }
        fn name(&self) -> &str {
            &self.name
        }
        fn version(&self) -> &str {
            "1.0"
        }
        fn configuration(&self) -> Option<&str> {
            None
        }
        fn children(&self) -> Vec<Box<dyn ResolvedModule + '_>> {
            if self.index + 1 < self.len {
                vec![Box::new(Chain::at(self.index + 1, self.len)) as Box<dyn ResolvedModule + '_>]
            } else {
                Vec::new()
            }
        }
    }

    struct ChainConf {
        len: u32,
    }

    impl ConfigurationSource for ChainConf {
        fn name(&self) -> &str {
            "runtimeClasspath"
        }
        fn description(&self) -> Option<&str> {
            None
        }
        fn is_transitive(&self) -> bool {
            true
        }
        fn is_can_be_resolved(&self) -> bool {
            true
        }
        fn is_can_be_consumed(&self) -> bool {
            false
        }
        fn extends_from(&self) -> Vec<String> {
            Vec::new()
        }
        fn declared_dependencies(&self) -> HostResult<Vec<DeclaredDependency>> {
            Ok(Vec::new())
        }
        fn resolve(&self) -> HostResult<Resolution<'_>> {
            Ok(Resolution::succeeded(vec![Box::new(Chain::at(0, self.len)) as Box<dyn ResolvedModule + '_>]))
        }
    }

    fn declared(name: &str, version: &str) -> DeclaredDependency {
        DeclaredDependency {
            group: Some("org".to_string()),
            name: name.to_string(),
            version: Some(version.to_string()),
        }
    }

    fn build(conf: &Conf) -> GradleDependencyConfiguration {
        let interner = DependencyInterner::new();
        let policy = ResolutionPolicy::default();
        ConfigurationBuilder::new(&interner, &policy, HostCapabilities::default()).build(conf)
    }

    #[test]
    fn test_requested_maps_to_resolved_version() {
        let conf = Conf {
            name: "compileClasspath",
            resolvable: true,
            declared: vec![declared("lib", "1.0")],
            first_level: vec![module("lib", "1.2", vec![module("other", "2.0", vec![])])],
            ..Default::default()
        };
        let built = build(&conf);

        assert_eq!(built.requested().len(), 1);
        let direct: Vec<_> = built.direct_resolved().collect();
        assert_eq!(direct.len(), 1);
        assert_eq!(direct[0].version(), "1.2");
        assert_eq!(direct[0].depth(), 0);
        assert_eq!(direct[0].requested().version(), Some("1.0"));
        assert_eq!(built.resolved().count(), 2);
        let other = built.find_resolved_dependency("org", "other").unwrap();
        assert_eq!(other.depth(), 1);
    }

    #[test]
    fn test_diamond_shares_node() {
        let d = module("d", "1.0", vec![]);
        let conf = Conf {
            name: "runtimeClasspath",
            resolvable: true,
            first_level: vec![module("a", "1.0", vec![module("b", "1.0", vec![d.clone()]), module("c", "1.0", vec![d])])],
            ..Default::default()
        };
        let built = build(&conf);

        assert_eq!(built.graph().len(), 4);
        let b = built.find_resolved_dependency("org", "b").unwrap();
        let c = built.find_resolved_dependency("org", "c").unwrap();
        assert_eq!(b.get().dependency_ids(), c.get().dependency_ids());
        assert_eq!(built.resolved().count(), 4);
    }

    #[test]
    fn test_cycle_terminates() {
        let conf = Conf {
            name: "runtimeClasspath",
            resolvable: true,
            self_loop: true,
            ..Default::default()
        };
        let built = build(&conf);

        assert_eq!(built.graph().len(), 1);
        let node = built.direct_resolved().next().unwrap();
        assert_eq!(node.get().dependency_ids(), &[node.id()]);
        assert_eq!(built.resolved().count(), 1);
    }

    #[test]
    fn test_unmatched_direct_module_gets_synthesized_request() {
        let conf = Conf {
            name: "compileClasspath",
            resolvable: true,
            declared: vec![declared("old-name", "1.0")],
            first_level: vec![module("new-name", "3.1", vec![])],
            ..Default::default()
        };
        let built = build(&conf);

        let node = built.direct_resolved().next().unwrap();
        assert_eq!(node.requested().artifact_id(), "new-name");
        assert_eq!(node.requested().version(), Some("3.1"));
        assert_eq!(node.requested().scope(), "compileClasspath");
        assert!(node.requested().exclusions().is_empty());
    }

    #[test]
    fn test_child_request_uses_host_configuration_scope() {
        let mut child = module("child", "1.0", vec![]);
        child.configuration = Some("runtime");
        let conf = Conf {
            name: "runtimeClasspath",
            resolvable: true,
            first_level: vec![module("parent", "1.0", vec![child, module("sibling", "1.0", vec![])])],
            ..Default::default()
        };
        let built = build(&conf);

        let child = built.find_resolved_dependency("org", "child").unwrap();
        assert_eq!(child.requested().scope(), "runtime");
        let sibling = built.find_resolved_dependency("org", "sibling").unwrap();
        assert_eq!(sibling.requested().scope(), "runtimeClasspath");
    }

    #[test]
    fn test_duplicate_first_level_keeps_first() {
        let conf = Conf {
            name: "compileClasspath",
            resolvable: true,
            first_level: vec![module("lib", "1.0", vec![]), module("lib", "2.0", vec![])],
            ..Default::default()
        };
        let built = build(&conf);
        let direct: Vec<_> = built.direct_resolved().collect();
        assert_eq!(direct.len(), 1);
        assert_eq!(direct[0].version(), "1.0");
    }

    #[test]
    fn test_excluded_configuration_is_not_resolved() {
        let conf = Conf {
            name: "archives",
            resolvable: true,
            declared: vec![declared("lib", "1.0")],
            panics: true,
            ..Default::default()
        };
        let built = build(&conf);
        assert_eq!(built.requested().len(), 1);
        assert_eq!(built.resolved().count(), 0);
        assert!(!built.is_resolution_failed());
    }

    #[test]
    fn test_unresolvable_configuration_is_not_resolved() {
        let conf = Conf {
            name: "implementation",
            resolvable: false,
            declared: vec![declared("lib", "1.0")],
            panics: true,
            ..Default::default()
        };
        let built = build(&conf);
        assert_eq!(built.resolved().count(), 0);
        assert!(!built.is_resolution_failed());
    }

    #[test]
    fn test_lenient_failure_keeps_partial_results() {
        let conf = Conf {
            name: "compileClasspath",
            resolvable: true,
            first_level: vec![module("lib", "1.0", vec![])],
            failure: Some(HostError::new(
                "org.gradle.api.artifacts.ResolveException",
                "Could not resolve org:missing:1.0",
            )),
            ..Default::default()
        };
        let built = build(&conf);
        assert!(built.is_resolution_failed());
        assert_eq!(built.exception_type(), Some("org.gradle.api.artifacts.ResolveException"));
        assert_eq!(built.direct_resolved().count(), 1);
    }

    #[test]
    fn test_panic_is_contained() {
        let conf = Conf {
            name: "compileClasspath",
            resolvable: true,
            declared: vec![declared("lib", "1.0")],
            panics: true,
            ..Default::default()
        };
        let built = build(&conf);
        assert_eq!(built.exception_type(), Some(PANIC_EXCEPTION_TYPE));
        assert_eq!(built.message(), Some("resolver exploded"));
        assert!(built.requested().is_empty());
    }

    #[test]
    fn test_declarable_flag_needs_capability() {
        let conf = Conf {
            name: "implementation",
            ..Default::default()
        };
        let interner = DependencyInterner::new();
        let policy = ResolutionPolicy::default();

        let without = ConfigurationBuilder::new(&interner, &policy, HostCapabilities::default()).build(&conf);
        assert!(without.is_can_be_declared());

        let caps = HostCapabilities {
            declarable_configurations: true,
            ..Default::default()
        };
        let with = ConfigurationBuilder::new(&interner, &policy, caps).build(&conf);
        assert!(!with.is_can_be_declared());
    }

    #[test]
    fn test_build_all_links_and_reports() {
        let implementation = Conf {
            name: "implementation",
            ..Default::default()
        };
        let classpath = Conf {
            name: "compileClasspath",
            resolvable: true,
            extends: vec!["implementation".to_string(), "ghost".to_string()],
            ..Default::default()
        };
        let interner = DependencyInterner::new();
        let policy = ResolutionPolicy::default();
        let builder = ConfigurationBuilder::new(&interner, &policy, HostCapabilities::default());

        let mut seen = Vec::new();
        let sources: Vec<&dyn ConfigurationSource> = vec![&implementation, &classpath];
        let configurations = builder.build_all(&sources, |i, total, name| seen.push((i, total, name.to_string())));

        assert_eq!(seen[1], (2, 2, "compileClasspath".to_string()));
        let classpath = configurations.get("compileClasspath").unwrap();
        assert_eq!(classpath.extends_from(), &["implementation".to_string()]);
    }

    #[test]
    fn test_faulty_getters_fail_only_their_configuration() {
        let implementation = Conf {
            name: "implementation",
            ..Default::default()
        };
        let classpath = Conf {
            name: "compileClasspath",
            resolvable: true,
            extends: vec!["implementation".to_string()],
            faulty_getters: true,
            ..Default::default()
        };

        let built = build(&classpath);
        assert_eq!(built.name(), "compileClasspath");
        assert_eq!(built.exception_type(), Some(PANIC_EXCEPTION_TYPE));
        assert_eq!(built.message(), Some("description getter threw"));

        let interner = DependencyInterner::new();
        let policy = ResolutionPolicy::default();
        let builder = ConfigurationBuilder::new(&interner, &policy, HostCapabilities::default());
        let sources: Vec<&dyn ConfigurationSource> = vec![&implementation, &classpath];
        let configurations = builder.build_all(&sources, |_, _, _| {});

        assert_eq!(configurations.len(), 2);
        assert!(configurations.get("compileClasspath").unwrap().extends_from().is_empty());
        assert!(!configurations.get("implementation").unwrap().is_resolution_failed());
    }

    #[test]
    fn test_unreadable_name_is_skipped() {
        let nameless = Conf {
            name: "hidden",
            nameless: true,
            ..Default::default()
        };
        let implementation = Conf {
            name: "implementation",
            ..Default::default()
        };

        let built = build(&nameless);
        assert_eq!(built.name(), UNREADABLE_NAME);
        assert_eq!(built.message(), Some("name getter threw"));

        let interner = DependencyInterner::new();
        let policy = ResolutionPolicy::default();
        let builder = ConfigurationBuilder::new(&interner, &policy, HostCapabilities::default());
        let mut reported = Vec::new();
        let sources: Vec<&dyn ConfigurationSource> = vec![&nameless, &implementation];
        let configurations = builder.build_all(&sources, |i, _, name| reported.push((i, name.to_string())));

        assert_eq!(configurations.names().collect::<Vec<_>>(), vec!["implementation"]);
        assert_eq!(reported, vec![(2, "implementation".to_string())]);
    }

    #[test]
    fn test_expansion_stops_at_max_depth() {
        let built = build_chain(MAX_EXPANSION_DEPTH + 88);

        assert_eq!(built.resolved().count(), MAX_EXPANSION_DEPTH as usize + 1);
        let deepest = built
            .find_resolved_dependency("org", &format!("m{}", MAX_EXPANSION_DEPTH))
            .unwrap();
        assert_eq!(deepest.depth(), MAX_EXPANSION_DEPTH);
        assert_eq!(deepest.children().count(), 0);
        assert!(built
            .find_resolved_dependency("org", &format!("m{}", MAX_EXPANSION_DEPTH + 1))
            .is_none());
        assert!(built.graph().is_consistent());
    }

    #[test]
    fn test_chain_below_max_depth_is_complete() {
        let built = build_chain(MAX_EXPANSION_DEPTH + 1);
        let deepest = built
            .find_resolved_dependency("org", &format!("m{}", MAX_EXPANSION_DEPTH))
            .unwrap();
        assert_eq!(deepest.children().count(), 0);
        assert_eq!(built.resolved().count(), MAX_EXPANSION_DEPTH as usize + 1);
    }

    fn build_chain(len: u32) -> GradleDependencyConfiguration {
        let interner = DependencyInterner::new();
        let policy = ResolutionPolicy::default();
        ConfigurationBuilder::new(&interner, &policy, HostCapabilities::default()).build(&ChainConf { len })
    }
}
