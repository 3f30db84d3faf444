use crate::dependency_model::domain::GradleModel;

/// ExtractionResponse - the extracted model and a summary of what failed
#[derive(Debug, Clone)]
pub struct ExtractionResponse {
    pub model: GradleModel,
    /// Names of project configurations whose resolution failed, sorted
    pub failed_configurations: Vec<String>,
}

impl ExtractionResponse {
    pub fn new(model: GradleModel) -> Self {
        let failed_configurations = model
            .gradle_project()
            .failed_configurations()
            .map(|c| c.name().to_string())
            .collect();
        Self {
            model,
            failed_configurations,
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_configurations.is_empty()
    }
}
