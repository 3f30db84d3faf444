mod configuration_builder;
mod interner;
mod project_builder;

pub use configuration_builder::{
    link_extends_from, ConfigurationBuilder, MAX_EXPANSION_DEPTH, PANIC_EXCEPTION_TYPE, UNREADABLE_NAME,
};
pub use interner::DependencyInterner;
pub use project_builder::{map_repositories, plugin_descriptors, GradleProjectBuilder, GradleSettingsBuilder};
