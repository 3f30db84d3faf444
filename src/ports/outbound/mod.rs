/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (build host, file system, console, etc.).
pub mod model_connection;
pub mod model_formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_source;

pub use model_connection::ModelConnection;
pub use model_formatter::ModelFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_source::{
    AppliedPlugin, ConfigurationSource, DeclaredDependency, DeclaredRepository, HostCapabilities,
    HostError, HostResult, ProjectSource, RepositoryKind, Resolution, ResolutionFailure,
    ResolvedModule, SettingsSource,
};
