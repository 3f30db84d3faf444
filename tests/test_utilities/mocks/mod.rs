/// Mock implementations for testing
mod mock_configuration;
mod mock_progress_reporter;
mod mock_project_source;

pub use mock_configuration::{MockConfiguration, MockModule};
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_source::{maven_repository, MockProjectSource, MockSettings};
