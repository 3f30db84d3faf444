use super::project::GradleProject;
use super::settings::GradleSettings;
use serde::{Deserialize, Serialize};

/// Everything extracted from one build: the unit shipped across the
/// process boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleModel {
    gradle_project: GradleProject,
    gradle_settings: Option<GradleSettings>,
}

impl GradleModel {
    pub fn new(gradle_project: GradleProject, gradle_settings: Option<GradleSettings>) -> Self {
        Self {
            gradle_project,
            gradle_settings,
        }
    }

    pub fn gradle_project(&self) -> &GradleProject {
        &self.gradle_project
    }

    pub fn gradle_settings(&self) -> Option<&GradleSettings> {
        self.gradle_settings.as_ref()
    }
}
