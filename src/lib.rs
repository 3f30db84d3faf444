//! gradle-model - dependency-configuration model extraction for Gradle builds
//!
//! This library turns the resolved object graph of a Gradle build into a
//! serializable model: every configuration with its requested dependencies,
//! its resolved dependency graph, its transitive closure and its place in the
//! extension hierarchy. The model can be shipped across a process boundary
//! and rebuilt on the other side.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_model`): coordinates, configurations, the
//!   per-configuration resolved graph, and the builders producing them
//! - **Transport** (`tooling_model`): the flat tooling form and its codec
//! - **Application Layer** (`application`): use cases, DTOs and factories
//! - **Ports** (`ports`): interface definitions for the build host and I/O
//! - **Adapters** (`adapters`): snapshot source, tooling connection,
//!   formatters, file and console output
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use gradle_model::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let snapshot = SnapshotReader::new().read(Path::new("build-snapshot.yml"))?;
//! let source = SnapshotProjectSource::new(snapshot);
//!
//! let use_case = ExtractModelUseCase::new(StderrProgressReporter::new());
//! let response = use_case.execute(&source, &ExtractionRequest::default())?;
//!
//! let project = response.model.gradle_project();
//! if let Some(lib) = project.find_dependency("runtimeClasspath", "org.example", "lib") {
//!     println!("resolved {}", lib.gav());
//! }
//!
//! let blob = codec::encode(&response.model)?;
//! assert_eq!(codec::decode(&blob)?, response.model);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_model;
pub mod ports;
pub mod shared;
pub mod tooling_model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, ModelFileReader, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{BinaryFormatter, JsonFormatter, TreeFormatter};
    pub use crate::adapters::outbound::snapshot::{BuildSnapshot, SnapshotProjectSource, SnapshotReader};
    pub use crate::adapters::outbound::tooling::{ProjectStager, ToolingConnection};
    pub use crate::application::dto::{ExtractionRequest, ExtractionResponse, OutputFormat};
    pub use crate::application::use_cases::{ExtractModelUseCase, LoadModelUseCase};
    pub use crate::dependency_model::domain::{
        ConfigurationMap, Dependency, GradleDependencyConfiguration, GradleModel, GradleProject,
        GradleSettings, GroupArtifact, GroupArtifactVersion, ResolvedDependency, ResolvedGroupArtifactVersion,
        ResolvedNode,
    };
    pub use crate::dependency_model::policies::ResolutionPolicy;
    pub use crate::dependency_model::services::{ConfigurationBuilder, DependencyInterner, GradleProjectBuilder};
    pub use crate::ports::outbound::{
        ConfigurationSource, ModelConnection, ModelFormatter, OutputPresenter, ProgressReporter, ProjectSource,
        ResolvedModule,
    };
    pub use crate::shared::Result;
    pub use crate::tooling_model::codec;
}
