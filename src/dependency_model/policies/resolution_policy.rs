use crate::dependency_model::domain::matches_glob;

/// ResolutionPolicy decides which resolvable configurations are worth resolving
///
/// Some configurations are redundant with others or are known to be hard
/// to resolve, and resolving them on newer Gradle versions prints long
/// deprecation traces. Skipped configurations keep their declarations but
/// have empty resolved lists and no recorded failure.
///
/// Always skipped:
/// 1. `archives` and `default`, which duplicate other configurations
/// 2. names starting with `incrementalScalaAnalysis`, created by the Scala plugin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionPolicy {
    extra_exclusions: Vec<String>,
}

const EXCLUDED_NAMES: [&str; 2] = ["archives", "default"];
const EXCLUDED_PREFIX: &str = "incrementalScalaAnalysis";

impl ResolutionPolicy {
    /// Creates a policy with additional exclusions. Each entry is an exact
    /// configuration name or a glob such as `*Scala*`.
    pub fn new(extra_exclusions: Vec<String>) -> Self {
        Self { extra_exclusions }
    }

    pub fn extra_exclusions(&self) -> &[String] {
        &self.extra_exclusions
    }

    pub fn is_excluded(&self, configuration_name: &str) -> bool {
        EXCLUDED_NAMES.contains(&configuration_name)
            || configuration_name.starts_with(EXCLUDED_PREFIX)
            || self
                .extra_exclusions
                .iter()
                .any(|pattern| matches_glob(configuration_name, pattern))
    }

    /// True when the configuration should be resolved at all.
    pub fn should_resolve(&self, configuration_name: &str, can_be_resolved: bool) -> bool {
        can_be_resolved && !self.is_excluded(configuration_name)
    }
}
