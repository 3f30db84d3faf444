use super::MockConfiguration;
use gradle_model::dependency_model::domain::FeaturePreview;
use gradle_model::ports::outbound::{
    AppliedPlugin, ConfigurationSource, DeclaredRepository, HostCapabilities, ProjectSource, RepositoryKind,
    SettingsSource,
};

pub fn maven_repository(name: &str, url: &str) -> DeclaredRepository {
    DeclaredRepository {
        name: Some(name.to_string()),
        kind: RepositoryKind::Maven,
        url: Some(url.to_string()),
        username: None,
        password: None,
    }
}

/// Mock SettingsSource
#[derive(Debug, Clone, Default)]
pub struct MockSettings {
    pub plugin_management_repositories: Vec<DeclaredRepository>,
    pub dependency_resolution_repositories: Vec<DeclaredRepository>,
    pub buildscript_repositories: Vec<DeclaredRepository>,
    pub buildscript_configurations: Vec<MockConfiguration>,
    pub plugins: Vec<AppliedPlugin>,
    pub feature_previews: Vec<FeaturePreview>,
}

impl SettingsSource for MockSettings {
    fn plugin_management_repositories(&self) -> Vec<DeclaredRepository> {
        self.plugin_management_repositories.clone()
    }

    fn dependency_resolution_repositories(&self) -> Vec<DeclaredRepository> {
        self.dependency_resolution_repositories.clone()
    }

    fn buildscript_repositories(&self) -> Vec<DeclaredRepository> {
        self.buildscript_repositories.clone()
    }

    fn buildscript_configurations(&self) -> Vec<&dyn ConfigurationSource> {
        self.buildscript_configurations
            .iter()
            .map(|c| c as &dyn ConfigurationSource)
            .collect()
    }

    fn plugins(&self) -> Vec<AppliedPlugin> {
        self.plugins.clone()
    }

    fn feature_previews(&self) -> Vec<FeaturePreview> {
        self.feature_previews.clone()
    }
}

/// Mock ProjectSource assembled from mock configurations
#[derive(Debug, Clone)]
pub struct MockProjectSource {
    pub name: String,
    pub group: Option<String>,
    pub version: Option<String>,
    pub path: String,
    pub capabilities: HostCapabilities,
    pub repositories: Vec<DeclaredRepository>,
    pub buildscript_repositories: Vec<DeclaredRepository>,
    pub plugins: Vec<AppliedPlugin>,
    pub configurations: Vec<MockConfiguration>,
    pub settings: Option<MockSettings>,
}

impl MockProjectSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            group: None,
            version: None,
            path: ":".to_string(),
            capabilities: HostCapabilities::default(),
            repositories: Vec::new(),
            buildscript_repositories: Vec::new(),
            plugins: Vec::new(),
            configurations: Vec::new(),
            settings: None,
        }
    }

    pub fn with_coordinates(mut self, group: &str, version: &str) -> Self {
        self.group = Some(group.to_string());
        self.version = Some(version.to_string());
        self
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    pub fn with_capabilities(mut self, capabilities: HostCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_repository(mut self, name: &str, url: &str) -> Self {
        self.repositories.push(maven_repository(name, url));
        self
    }

    pub fn with_plugin(mut self, class_name: &str, id: &str) -> Self {
        self.plugins.push(AppliedPlugin {
            class_name: class_name.to_string(),
            id: Some(id.to_string()),
        });
        self
    }

    pub fn with_configuration(mut self, configuration: MockConfiguration) -> Self {
        self.configurations.push(configuration);
        self
    }

    pub fn with_settings(mut self, settings: MockSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

impl ProjectSource for MockProjectSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    fn repositories(&self) -> Vec<DeclaredRepository> {
        self.repositories.clone()
    }

    fn buildscript_repositories(&self) -> Vec<DeclaredRepository> {
        self.buildscript_repositories.clone()
    }

    fn plugins(&self) -> Vec<AppliedPlugin> {
        self.plugins.clone()
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
