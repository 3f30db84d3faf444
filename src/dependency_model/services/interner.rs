use crate::dependency_model::domain::{
    Dependency, GroupArtifact, GroupArtifactVersion, ResolvedGroupArtifactVersion,
};
use dashmap::DashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Cache key for requested dependencies. Scope is part of the key so a
/// coordinate declared on two configurations keeps both scopes.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct RequestedKey {
    scope: String,
    gav: Arc<GroupArtifactVersion>,
}

/// DependencyInterner shares one `Arc` per structurally-equal coordinate.
///
/// Large builds request the same few thousand coordinates from hundreds of
/// configurations; interning keeps one allocation per coordinate. The caches
/// are thread-safe and never evict. Call [`clear`](Self::clear) between
/// independent extractions in a long-lived process.
#[derive(Debug, Default)]
pub struct DependencyInterner {
    group_artifacts: DashMap<GroupArtifact, Arc<GroupArtifact>>,
    gavs: DashMap<GroupArtifactVersion, Arc<GroupArtifactVersion>>,
    resolved_gavs: DashMap<ResolvedGroupArtifactVersion, Arc<ResolvedGroupArtifactVersion>>,
    requested: DashMap<RequestedKey, Arc<Dependency>>,
}

fn intern<K>(cache: &DashMap<K, Arc<K>>, value: K) -> Arc<K>
where
    K: Eq + Hash + Clone,
{
    if let Some(existing) = cache.get(&value) {
        return Arc::clone(existing.value());
    }
    // Racing inserts settle on whichever value got in first.
    Arc::clone(cache.entry(value.clone()).or_insert_with(|| Arc::new(value)).value())
}

impl DependencyInterner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern_group_artifact(&self, ga: GroupArtifact) -> Arc<GroupArtifact> {
        intern(&self.group_artifacts, ga)
    }

    pub fn intern_gav(&self, gav: GroupArtifactVersion) -> Arc<GroupArtifactVersion> {
        intern(&self.gavs, gav)
    }

    pub fn intern_resolved_gav(&self, gav: ResolvedGroupArtifactVersion) -> Arc<ResolvedGroupArtifactVersion> {
        intern(&self.resolved_gavs, gav)
    }

    /// Plain `jar` dependency on `gav` requested from `scope`.
    pub fn intern_requested(&self, gav: GroupArtifactVersion, scope: &str) -> Arc<Dependency> {
        let gav = self.intern_gav(gav);
        let key = RequestedKey {
            scope: scope.to_string(),
            gav: Arc::clone(&gav),
        };
        if let Some(existing) = self.requested.get(&key) {
            return Arc::clone(existing.value());
        }
        Arc::clone(
            self.requested
                .entry(key)
                .or_insert_with(|| Arc::new(Dependency::new(gav, scope)))
                .value(),
        )
    }

    /// Drops every cached instance. Arcs already handed out stay valid.
    pub fn clear(&self) {
        self.group_artifacts.clear();
        self.gavs.clear();
        self.resolved_gavs.clear();
        self.requested.clear();
    }

    /// Total number of cached instances across all caches.
    pub fn len(&self) -> usize {
        self.group_artifacts.len() + self.gavs.len() + self.resolved_gavs.len() + self.requested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
