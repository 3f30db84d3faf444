use super::schema::{BuildSnapshot, ConfigurationSnapshot, ModuleSnapshot, SettingsSnapshot};
use crate::dependency_model::domain::{FeaturePreview, GradleDependencyConstraint};
use crate::ports::outbound::{
    AppliedPlugin, ConfigurationSource, DeclaredDependency, DeclaredRepository, HostCapabilities, HostResult,
    ProjectSource, Resolution, ResolvedModule, SettingsSource,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

type ModulePool = Arc<BTreeMap<String, ModuleSnapshot>>;

/// SnapshotProjectSource adapter serving a recorded build as a project source
///
/// This adapter implements the ProjectSource port on top of a
/// [`BuildSnapshot`], so extraction runs without a live Gradle daemon.
pub struct SnapshotProjectSource {
    snapshot: BuildSnapshot,
    configurations: Vec<SnapshotConfiguration>,
    settings: Option<SnapshotSettings>,
}

impl SnapshotProjectSource {
    pub fn new(mut snapshot: BuildSnapshot) -> Self {
        let modules: ModulePool = Arc::new(std::mem::take(&mut snapshot.modules));
        let configurations = wrap_configurations(std::mem::take(&mut snapshot.configurations), &modules);
        let settings = snapshot.settings.take().map(|mut settings| SnapshotSettings {
            configurations: wrap_configurations(std::mem::take(&mut settings.buildscript_configurations), &modules),
            data: settings,
        });
        Self {
            snapshot,
            configurations,
            settings,
        }
    }
}

fn wrap_configurations(configurations: Vec<ConfigurationSnapshot>, modules: &ModulePool) -> Vec<SnapshotConfiguration> {
    configurations
        .into_iter()
        .map(|data| SnapshotConfiguration {
            data,
            modules: Arc::clone(modules),
        })
        .collect()
}

impl ProjectSource for SnapshotProjectSource {
    fn name(&self) -> &str {
        &self.snapshot.name
    }

    fn group(&self) -> Option<&str> {
        self.snapshot.group.as_deref()
    }

    fn version(&self) -> Option<&str> {
        self.snapshot.version.as_deref()
    }

    fn path(&self) -> &str {
        &self.snapshot.path
    }

    fn capabilities(&self) -> HostCapabilities {
        self.snapshot.capabilities
    }

    fn repositories(&self) -> Vec<DeclaredRepository> {
        self.snapshot.repositories.clone()
    }

    fn buildscript_repositories(&self) -> Vec<DeclaredRepository> {
        self.snapshot.buildscript_repositories.clone()
    }

    fn plugins(&self) -> Vec<AppliedPlugin> {
        self.snapshot.plugins.clone()
    }

    fn configurations(&self) -> Vec<&dyn ConfigurationSource> {
        self.configurations
            .iter()
            .map(|c| c as &dyn ConfigurationSource)
            .collect()
    }

    fn settings(&self) -> Option<&dyn SettingsSource> {
        self.settings.as_ref().map(|s| s as &dyn SettingsSource)
    }
}

struct SnapshotSettings {
    data: SettingsSnapshot,
    configurations: Vec<SnapshotConfiguration>,
}

impl SettingsSource for SnapshotSettings {
    fn plugin_management_repositories(&self) -> Vec<DeclaredRepository> {
        self.data.plugin_management_repositories.clone()
    }

    fn dependency_resolution_repositories(&self) -> Vec<DeclaredRepository> {
        self.data.dependency_resolution_repositories.clone()
    }

    fn buildscript_repositories(&self) -> Vec<DeclaredRepository> {
        self.data.buildscript_repositories.clone()
    }

    fn buildscript_configurations(&self) -> Vec<&dyn ConfigurationSource> {
        self.configurations
            .iter()
            .map(|c| c as &dyn ConfigurationSource)
            .collect()
    }

    fn plugins(&self) -> Vec<AppliedPlugin> {
        self.data.plugins.clone()
    }

    fn feature_previews(&self) -> Vec<FeaturePreview> {
        self.data.feature_previews.clone()
    }
}

struct SnapshotConfiguration {
    data: ConfigurationSnapshot,
    modules: ModulePool,
}

impl SnapshotConfiguration {
    fn module(&self, id: &str) -> Option<ModuleView<'_>> {
        module_view(&self.modules, id, &self.data.name)
    }
}

fn module_view<'a>(modules: &'a BTreeMap<String, ModuleSnapshot>, id: &str, configuration: &'a str) -> Option<ModuleView<'a>> {
    match modules.get(id) {
        Some(module) => Some(ModuleView {
            modules,
            module,
            configuration,
        }),
        None => {
            warn!(configuration, module = id, "Snapshot refers to an unknown module");
            None
        }
    }
}

impl ConfigurationSource for SnapshotConfiguration {
    fn name(&self) -> &str {
        &self.data.name
    }

    fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    fn is_transitive(&self) -> bool {
        self.data.transitive
    }

    fn is_can_be_resolved(&self) -> bool {
        self.data.can_be_resolved
    }

    fn is_can_be_consumed(&self) -> bool {
        self.data.can_be_consumed
    }

    fn is_can_be_declared(&self) -> bool {
        self.data.can_be_declared
    }

    fn extends_from(&self) -> Vec<String> {
        self.data.extends_from.clone()
    }

    fn declared_dependencies(&self) -> HostResult<Vec<DeclaredDependency>> {
        match &self.data.error {
            Some(error) => Err(error.clone()),
            None => Ok(self.data.dependencies.clone()),
        }
    }

    fn constraints(&self) -> HostResult<Vec<GradleDependencyConstraint>> {
        Ok(self.data.constraints.clone())
    }

    fn resolve(&self) -> HostResult<Resolution<'_>> {
        let first_level = self
            .data
            .resolved
            .iter()
            .filter_map(|id| self.module(id))
            .map(|view| Box::new(view) as Box<dyn ResolvedModule + '_>)
            .collect();
        Ok(Resolution {
            first_level,
            failure: self.data.failure.clone(),
        })
    }
}

/// A module of the pool, seen from one configuration.
#[derive(Clone, Copy)]
struct ModuleView<'a> {
    modules: &'a BTreeMap<String, ModuleSnapshot>,
    module: &'a ModuleSnapshot,
    configuration: &'a str,
}

impl ResolvedModule for ModuleView<'_> {
    fn group(&self) -> &str {
        &self.module.group
    }

    fn name(&self) -> &str {
        &self.module.name
    }

    fn version(&self) -> &str {
        &self.module.version
    }

    fn configuration(&self) -> Option<&str> {
        self.module.configuration.as_deref()
    }

    fn children(&self) -> Vec<Box<dyn ResolvedModule + '_>> {
        self.module
            .children
            .iter()
            .filter_map(|id| module_view(self.modules, id, self.configuration))
            .map(|view| Box::new(view) as Box<dyn ResolvedModule + '_>)
            .collect()
    }
}
