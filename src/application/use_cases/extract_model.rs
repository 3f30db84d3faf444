use crate::application::dto::{ExtractionRequest, ExtractionResponse};
use crate::dependency_model::policies::ResolutionPolicy;
use crate::dependency_model::services::{DependencyInterner, GradleProjectBuilder};
use crate::ports::outbound::{ProgressReporter, ProjectSource};
use crate::shared::Result;
use std::sync::Arc;
use tracing::debug;

/// ExtractModelUseCase - builds a [`GradleModel`](crate::dependency_model::domain::GradleModel)
/// from a project source
///
/// The interner is shared across executions so that several projects of
/// one build share coordinate instances. Call [`DependencyInterner::clear`]
/// between unrelated builds.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct ExtractModelUseCase<PR> {
    progress_reporter: PR,
    interner: Arc<DependencyInterner>,
}

impl<PR: ProgressReporter> ExtractModelUseCase<PR> {
    pub fn new(progress_reporter: PR) -> Self {
        Self::with_interner(progress_reporter, Arc::new(DependencyInterner::new()))
    }

    pub fn with_interner(progress_reporter: PR, interner: Arc<DependencyInterner>) -> Self {
        Self {
            progress_reporter,
            interner,
        }
    }

    pub fn interner(&self) -> &Arc<DependencyInterner> {
        &self.interner
    }

    /// # Errors
    /// Fails only when the project identity is malformed. Configurations
    /// that cannot be resolved are recorded on the model and reported as
    /// warnings.
    pub fn execute(&self, source: &dyn ProjectSource, request: &ExtractionRequest) -> Result<ExtractionResponse> {
        self.progress_reporter.report(&format!(
            "📖 Extracting dependency model for project '{}' ({})",
            source.name(),
            source.path()
        ));

        let policy = ResolutionPolicy::new(request.exclude_patterns.clone());
        let builder = GradleProjectBuilder::new(&self.interner, &policy);
        let model = builder.build_model(source, request.include_settings, |current, total, name| {
            self.progress_reporter.report_progress(current, total, Some(name));
        })?;
        debug!(interned = self.interner.len(), "Interner size after extraction");

        let response = ExtractionResponse::new(model);
        for configuration in response.model.gradle_project().failed_configurations() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Configuration '{}' failed to resolve: {}: {}",
                configuration.name(),
                configuration.exception_type().unwrap_or_default(),
                configuration.message().unwrap_or("no message")
            ));
        }

        let project = response.model.gradle_project();
        self.progress_reporter.report_completion(&format!(
            "✅ Extracted {} configuration(s), {} failed",
            project.name_to_configuration().len(),
            response.failed_configurations.len()
        ));
        Ok(response)
    }
}
