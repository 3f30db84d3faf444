use gradle_model::dependency_model::domain::GradleDependencyConstraint;
use gradle_model::ports::outbound::{
    ConfigurationSource, DeclaredDependency, HostError, HostResult, Resolution, ResolvedModule,
};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct ModuleEntry {
    group: String,
    name: String,
    version: String,
    configuration: Option<String>,
    children: Vec<String>,
}

/// A resolved module of a [`MockConfiguration`], looked up by id so that
/// shared children and cycles can be expressed.
pub struct MockModule<'a> {
    pool: &'a HashMap<String, ModuleEntry>,
    entry: &'a ModuleEntry,
}

impl ResolvedModule for MockModule<'_> {
    fn group(&self) -> &str {
        &self.entry.group
    }

    fn name(&self) -> &str {
        &self.entry.name
    }

    fn version(&self) -> &str {
        &self.entry.version
    }

    fn configuration(&self) -> Option<&str> {
        self.entry.configuration.as_deref()
    }

    fn children(&self) -> Vec<Box<dyn ResolvedModule + '_>> {
        self.entry
            .children
            .iter()
            .filter_map(|id| self.pool.get(id))
            .map(|entry| Box::new(MockModule { pool: self.pool, entry }) as Box<dyn ResolvedModule + '_>)
            .collect()
    }
}

/// Mock ConfigurationSource with a scripted resolution result
#[derive(Debug, Clone)]
pub struct MockConfiguration {
    name: String,
    description: Option<String>,
    transitive: bool,
    can_be_resolved: bool,
    can_be_consumed: bool,
    can_be_declared: bool,
    extends_from: Vec<String>,
    declared: Vec<DeclaredDependency>,
    declaration_error: Option<HostError>,
    constraints: Vec<GradleDependencyConstraint>,
    modules: HashMap<String, ModuleEntry>,
    roots: Vec<String>,
    failure: Option<HostError>,
    resolve_error: Option<HostError>,
    panics: bool,
}

impl MockConfiguration {
    /// A declarable, non-resolvable configuration such as `implementation`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            transitive: true,
            can_be_resolved: false,
            can_be_consumed: false,
            can_be_declared: true,
            extends_from: Vec::new(),
            declared: Vec::new(),
            declaration_error: None,
            constraints: Vec::new(),
            modules: HashMap::new(),
            roots: Vec::new(),
            failure: None,
            resolve_error: None,
            panics: false,
        }
    }

    /// A resolvable classpath such as `runtimeClasspath`.
    pub fn resolvable(name: &str) -> Self {
        Self {
            can_be_resolved: true,
            can_be_declared: false,
            ..Self::new(name)
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn consumable(mut self) -> Self {
        self.can_be_consumed = true;
        self
    }

    pub fn extends(mut self, parent: &str) -> Self {
        self.extends_from.push(parent.to_string());
        self
    }

    pub fn declares(mut self, group: &str, name: &str, version: Option<&str>) -> Self {
        self.declared.push(DeclaredDependency {
            group: Some(group.to_string()),
            name: name.to_string(),
            version: version.map(str::to_string),
        });
        self
    }

    pub fn with_constraint(mut self, constraint: GradleDependencyConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Registers a module under `id`; `children` are ids of other modules.
    pub fn module(mut self, id: &str, coordinates: &str, children: &[&str]) -> Self {
        let mut parts = coordinates.splitn(3, ':');
        let entry = ModuleEntry {
            group: parts.next().unwrap_or_default().to_string(),
            name: parts.next().unwrap_or_default().to_string(),
            version: parts.next().unwrap_or_default().to_string(),
            configuration: None,
            children: children.iter().map(|c| c.to_string()).collect(),
        };
        self.modules.insert(id.to_string(), entry);
        self
    }

    /// Marks the module `id` as selected from another configuration's variant.
    pub fn module_from(mut self, id: &str, configuration: &str) -> Self {
        if let Some(entry) = self.modules.get_mut(id) {
            entry.configuration = Some(configuration.to_string());
        }
        self
    }

    pub fn roots(mut self, ids: &[&str]) -> Self {
        self.roots = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    /// Resolution reports a failure next to whatever first-level results exist.
    pub fn with_failure(mut self, exception_type: &str, message: &str) -> Self {
        self.failure = Some(HostError::new(exception_type, message));
        self
    }

    /// `resolve()` itself returns an error.
    pub fn with_resolve_error(mut self, exception_type: &str, message: &str) -> Self {
        self.resolve_error = Some(HostError::new(exception_type, message));
        self
    }

    /// Reading the declared dependencies returns an error.
    pub fn with_declaration_error(mut self, exception_type: &str, message: &str) -> Self {
        self.declaration_error = Some(HostError::new(exception_type, message));
        self
    }

    /// `resolve()` panics.
    pub fn panicking(mut self) -> Self {
        self.panics = true;
        self
    }
}

impl ConfigurationSource for MockConfiguration {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn is_transitive(&self) -> bool {
        self.transitive
    }

    fn is_can_be_resolved(&self) -> bool {
        self.can_be_resolved
    }

    fn is_can_be_consumed(&self) -> bool {
        self.can_be_consumed
    }

    fn is_can_be_declared(&self) -> bool {
        self.can_be_declared
    }

    fn extends_from(&self) -> Vec<String> {
        self.extends_from.clone()
    }

    fn declared_dependencies(&self) -> HostResult<Vec<DeclaredDependency>> {
        match &self.declaration_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.declared.clone()),
        }
    }

    fn constraints(&self) -> HostResult<Vec<GradleDependencyConstraint>> {
        Ok(self.constraints.clone())
    }

    fn resolve(&self) -> HostResult<Resolution<'_>> {
        if self.panics {
            panic!("resolver exploded while resolving {}", self.name);
        }
        if let Some(error) = &self.resolve_error {
            return Err(error.clone());
        }
        let first_level = self
            .roots
            .iter()
            .filter_map(|id| self.modules.get(id))
            .map(|entry| {
                Box::new(MockModule {
                    pool: &self.modules,
                    entry,
                }) as Box<dyn ResolvedModule + '_>
            })
            .collect();
        Ok(Resolution {
            first_level,
            failure: self.failure.clone(),
        })
    }
}
