use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder Gradle uses for a missing group, version or project version.
pub const UNSPECIFIED: &str = "unspecified";

/// Normalizes Gradle's literal `"unspecified"` to `None`.
///
/// Empty strings are treated the same way since the host produces both
/// for "no value".
pub fn unspecified_to_none(value: Option<&str>) -> Option<String> {
    match value {
        None => None,
        Some(v) if v.is_empty() || v == UNSPECIFIED => None,
        Some(v) => Some(v.to_string()),
    }
}

/// Version-less identity of a module, used to pair a resolved module with
/// the request that produced it before the resolved version is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupArtifact {
    group_id: String,
    artifact_id: String,
}

impl GroupArtifact {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }
}

impl fmt::Display for GroupArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Identity of a requested dependency. `version` is `None` when the
/// declaration leaves it to a platform, constraint or the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupArtifactVersion {
    group_id: String,
    artifact_id: String,
    version: Option<String>,
}

impl GroupArtifactVersion {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn group_artifact(&self) -> GroupArtifact {
        GroupArtifact::new(self.group_id.clone(), self.artifact_id.clone())
    }
}

impl fmt::Display for GroupArtifactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{}", self.group_id, self.artifact_id, version),
            None => write!(f, "{}:{}", self.group_id, self.artifact_id),
        }
    }
}

/// Identity of a module after resolution. The version is always concrete.
///
/// `repository` stays `None` for Gradle builds: the resolver knows where a
/// module came from but does not expose it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResolvedGroupArtifactVersion {
    repository: Option<String>,
    group_id: String,
    artifact_id: String,
    version: String,
    dated_snapshot_version: Option<String>,
}

impl ResolvedGroupArtifactVersion {
    pub fn new(
        repository: Option<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        dated_snapshot_version: Option<String>,
    ) -> Self {
        Self {
            repository,
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            dated_snapshot_version,
        }
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn dated_snapshot_version(&self) -> Option<&str> {
        self.dated_snapshot_version.as_deref()
    }

    pub fn group_artifact(&self) -> GroupArtifact {
        GroupArtifact::new(self.group_id.clone(), self.artifact_id.clone())
    }

    /// The requested form of this coordinate, pinned to the resolved version.
    pub fn as_requested(&self) -> GroupArtifactVersion {
        GroupArtifactVersion::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            unspecified_to_none(Some(&self.version)),
        )
    }
}

impl fmt::Display for ResolvedGroupArtifactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
