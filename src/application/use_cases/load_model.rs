use crate::application::dto::ExtractionResponse;
use crate::ports::outbound::{ModelConnection, ProgressReporter};
use crate::shared::Result;

/// LoadModelUseCase - obtains a model that was built in another process
///
/// # Type Parameters
/// * `C` - ModelConnection implementation (model file, tooling helper)
/// * `PR` - ProgressReporter implementation
pub struct LoadModelUseCase<C, PR> {
    connection: C,
    progress_reporter: PR,
}

impl<C: ModelConnection, PR: ProgressReporter> LoadModelUseCase<C, PR> {
    pub fn new(connection: C, progress_reporter: PR) -> Self {
        Self {
            connection,
            progress_reporter,
        }
    }

    /// # Errors
    /// Transport and decode failures abort the load.
    pub fn execute(&self) -> Result<ExtractionResponse> {
        self.progress_reporter.report("📥 Loading dependency model...");
        let model = self.connection.fetch_model()?;
        let response = ExtractionResponse::new(model);
        self.progress_reporter.report_completion(&format!(
            "✅ Loaded project '{}' with {} configuration(s)",
            response.model.gradle_project().path(),
            response.model.gradle_project().name_to_configuration().len()
        ));
        Ok(response)
    }
}
