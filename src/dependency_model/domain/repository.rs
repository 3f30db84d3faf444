use serde::{Deserialize, Serialize};
use std::fmt;

/// A Maven-layout repository declared on the project, its buildscript or
/// the settings file.
///
/// `uri` is kept as a string because Gradle allows property references
/// that are not valid URIs until evaluated.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MavenRepository {
    id: Option<String>,
    uri: String,
    releases: Option<String>,
    snapshots: Option<String>,
    known_to_exist: bool,
    username: Option<String>,
    password: Option<String>,
    derive_metadata_if_missing: Option<bool>,
}

impl MavenRepository {
    /// Repository as Gradle declares it: releases and snapshots both enabled.
    pub fn new(id: Option<String>, uri: impl Into<String>) -> Self {
        Self {
            id,
            uri: uri.into(),
            releases: Some("true".to_string()),
            snapshots: Some("true".to_string()),
            known_to_exist: true,
            username: None,
            password: None,
            derive_metadata_if_missing: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: Option<String>,
        uri: String,
        releases: Option<String>,
        snapshots: Option<String>,
        known_to_exist: bool,
        username: Option<String>,
        password: Option<String>,
        derive_metadata_if_missing: Option<bool>,
    ) -> Self {
        Self {
            id,
            uri,
            releases,
            snapshots,
            known_to_exist,
            username,
            password,
            derive_metadata_if_missing,
        }
    }

    /// The Gradle Plugin Portal, used when a build declares no plugin repositories.
    pub fn gradle_plugin_portal() -> Self {
        Self::new(
            Some("Gradle Central Plugin Repository".to_string()),
            "https://plugins.gradle.org/m2",
        )
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn releases(&self) -> Option<&str> {
        self.releases.as_deref()
    }

    pub fn snapshots(&self) -> Option<&str> {
        self.snapshots.as_deref()
    }

    pub fn is_known_to_exist(&self) -> bool {
        self.known_to_exist
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn derive_metadata_if_missing(&self) -> Option<bool> {
        self.derive_metadata_if_missing
    }
}

impl fmt::Debug for MavenRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MavenRepository")
            .field("id", &self.id)
            .field("uri", &self.uri)
            .field("releases", &self.releases)
            .field("snapshots", &self.snapshots)
            .field("known_to_exist", &self.known_to_exist)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("derive_metadata_if_missing", &self.derive_metadata_if_missing)
            .finish()
    }
}

/// A plugin applied to a project or settings file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradlePluginDescriptor {
    fully_qualified_class_name: String,
    id: Option<String>,
}

impl GradlePluginDescriptor {
    pub fn new(fully_qualified_class_name: impl Into<String>, id: Option<String>) -> Self {
        Self {
            fully_qualified_class_name: fully_qualified_class_name.into(),
            id,
        }
    }

    pub fn fully_qualified_class_name(&self) -> &str {
        &self.fully_qualified_class_name
    }

    /// `None` for script plugins and on hosts that cannot map a class back to its id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
