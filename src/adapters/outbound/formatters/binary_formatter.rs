use crate::dependency_model::domain::GradleModel;
use crate::ports::outbound::ModelFormatter;
use crate::shared::Result;
use crate::tooling_model::codec;

/// BinaryFormatter adapter writing the MessagePack blob read back by `--model`
pub struct BinaryFormatter;

impl BinaryFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BinaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelFormatter for BinaryFormatter {
    fn format(&self, model: &GradleModel) -> Result<Vec<u8>> {
        codec::encode(model)
    }
}
