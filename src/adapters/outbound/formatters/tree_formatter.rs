use crate::dependency_model::domain::{GradleDependencyConfiguration, GradleModel, NodeId, ResolvedNode};
use crate::ports::outbound::ModelFormatter;
use crate::shared::Result;
use std::collections::HashSet;
use std::fmt::Write;

/// TreeFormatter adapter rendering configurations the way `gradle dependencies` does
///
/// A module whose subtree was already printed in the same configuration is
/// marked `(*)` and not expanded again.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_configuration(out: &mut String, configuration: &GradleDependencyConfiguration) -> std::fmt::Result {
        match configuration.description() {
            Some(description) => writeln!(out, "{} - {}", configuration.name(), description)?,
            None => writeln!(out, "{}", configuration.name())?,
        }

        if let Some(exception_type) = configuration.exception_type() {
            writeln!(
                out,
                "FAILED: {}: {}",
                exception_type,
                configuration.message().unwrap_or("no message")
            )?;
        }

        let direct: Vec<ResolvedNode<'_>> = configuration.direct_resolved().collect();
        if direct.is_empty() {
            writeln!(out, "No dependencies")?;
        }

        let mut seen = HashSet::new();
        let count = direct.len();
        for (index, node) in direct.into_iter().enumerate() {
            Self::render_node(out, node, "", index + 1 == count, &mut seen, true)?;
        }
        writeln!(out)
    }

    fn render_node(
        out: &mut String,
        node: ResolvedNode<'_>,
        prefix: &str,
        is_last: bool,
        seen: &mut HashSet<NodeId>,
        is_direct: bool,
    ) -> std::fmt::Result {
        let connector = if is_last { "\\--- " } else { "+--- " };
        write!(out, "{}{}{}", prefix, connector, Self::label(node, is_direct))?;

        let children: Vec<ResolvedNode<'_>> = node.children().collect();
        if !seen.insert(node.id()) {
            if !children.is_empty() {
                write!(out, " (*)")?;
            }
            return writeln!(out);
        }
        writeln!(out)?;

        let child_prefix = format!("{}{}", prefix, if is_last { "     " } else { "|    " });
        let count = children.len();
        for (index, child) in children.into_iter().enumerate() {
            Self::render_node(out, child, &child_prefix, index + 1 == count, seen, false)?;
        }
        Ok(())
    }

    /// `group:artifact:requested -> resolved` for first-level modules whose
    /// declared version was changed by resolution.
    fn label(node: ResolvedNode<'_>, is_direct: bool) -> String {
        let resolved = node.gav();
        match node.requested().version() {
            Some(requested) if is_direct && requested != resolved.version() => format!(
                "{}:{}:{} -> {}",
                resolved.group_id(),
                resolved.artifact_id(),
                requested,
                resolved.version()
            ),
            None if is_direct => format!(
                "{}:{} -> {}",
                resolved.group_id(),
                resolved.artifact_id(),
                resolved.version()
            ),
            _ => resolved.to_string(),
        }
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelFormatter for TreeFormatter {
    fn format(&self, model: &GradleModel) -> Result<Vec<u8>> {
        let project = model.gradle_project();
        let mut out = String::new();

        let coordinates = match (project.group(), project.version()) {
            (Some(group), Some(version)) => format!(" ({}:{}:{})", group, project.name(), version),
            (None, Some(version)) => format!(" ({}:{})", project.name(), version),
            _ => String::new(),
        };
        writeln!(out, "Project '{}'{}", project.path(), coordinates)?;
        writeln!(out)?;

        for configuration in project.configurations() {
            Self::render_configuration(&mut out, configuration)?;
        }

        if let Some(settings) = model.gradle_settings() {
            let buildscript = settings.buildscript().name_to_configuration();
            if !buildscript.is_empty() {
                writeln!(out, "Settings buildscript")?;
                writeln!(out)?;
                for configuration in buildscript.iter() {
                    Self::render_configuration(&mut out, configuration)?;
                }
            }
        }

        Ok(out.into_bytes())
    }
}
