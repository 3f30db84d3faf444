use crate::dependency_model::domain::GradleModel;
use crate::ports::outbound::ModelFormatter;
use crate::shared::Result;
use crate::tooling_model::codec;

/// JsonFormatter adapter writing the tooling form as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelFormatter for JsonFormatter {
    fn format(&self, model: &GradleModel) -> Result<Vec<u8>> {
        let mut json = codec::to_json(model)?;
        json.push('\n');
        Ok(json.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_model::domain::{GradleProject, ProjectPath};

    #[test]
    fn test_json_output_is_parseable() {
        let model = GradleModel::new(
            GradleProject::new("app", ProjectPath::root()).with_group(Some("com.example".to_string())),
            None,
        );
        let bytes = JsonFormatter::new().format(&model).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["gradle_project"]["name"], "app");
        assert_eq!(value["gradle_project"]["group"], "com.example");
        assert!(value["gradle_settings"].is_null());
    }
}
