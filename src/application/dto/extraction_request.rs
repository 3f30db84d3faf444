/// ExtractionRequest - options for building a model from a project source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionRequest {
    /// Glob patterns naming configurations that must not be resolved,
    /// on top of the built-in exclusion list
    pub exclude_patterns: Vec<String>,
    /// Whether settings (plugin repositories, feature previews, settings
    /// buildscript) are extracted as well
    pub include_settings: bool,
}

impl ExtractionRequest {
    pub fn new(exclude_patterns: Vec<String>, include_settings: bool) -> Self {
        Self {
            exclude_patterns,
            include_settings,
        }
    }
}
