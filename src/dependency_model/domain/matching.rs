use glob::Pattern;

/// Glob match used by every dependency lookup on the model.
///
/// `*` matches any run of characters and `?` one character. A pattern that
/// does not compile as a glob is compared literally, so coordinates with
/// brackets still find themselves.
pub fn matches_glob(value: &str, pattern: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    match Pattern::new(pattern) {
        Ok(compiled) => compiled.matches(value),
        Err(_) => value == pattern,
    }
}

/// Both halves of a group/artifact pair must match.
pub fn matches_coordinates(group_id: &str, artifact_id: &str, group_glob: &str, artifact_glob: &str) -> bool {
    matches_glob(group_id, group_glob) && matches_glob(artifact_id, artifact_glob)
}
