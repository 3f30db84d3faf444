pub mod configuration;
pub mod coordinates;
pub mod dependency;
pub mod matching;
pub mod model;
pub mod project;
pub mod repository;
pub mod resolved_graph;
pub mod settings;

pub use configuration::{ConfigurationFlags, ConfigurationMap, GradleDependencyConfiguration};
pub use coordinates::{
    unspecified_to_none, GroupArtifact, GroupArtifactVersion, ResolvedGroupArtifactVersion,
};
pub use dependency::{Dependency, GradleDependencyConstraint, License, DEFAULT_TYPE};
pub use matching::{matches_coordinates, matches_glob};
pub use model::GradleModel;
pub use project::{GradleProject, ProjectPath};
pub use repository::{GradlePluginDescriptor, MavenRepository};
pub use resolved_graph::{NodeId, ResolvedDependency, ResolvedGraph, ResolvedNode};
pub use settings::{FeaturePreview, GradleBuildscript, GradleSettings};
