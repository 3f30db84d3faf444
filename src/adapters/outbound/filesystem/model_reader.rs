use crate::dependency_model::domain::GradleModel;
use crate::ports::outbound::ModelConnection;
use crate::shared::error::ExtractionError;
use crate::shared::security::{read_regular_file, MAX_INPUT_SIZE};
use crate::shared::Result;
use crate::tooling_model::codec;
use std::path::PathBuf;

/// ModelFileReader adapter loading a model blob written by `--format binary`
///
/// This adapter implements the ModelConnection port for models that were
/// transported through a file rather than a live connection.
pub struct ModelFileReader {
    path: PathBuf,
}

impl ModelFileReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ModelConnection for ModelFileReader {
    fn fetch_model(&self) -> Result<GradleModel> {
        if !self.path.exists() {
            return Err(ExtractionError::FileReadError {
                path: self.path.clone(),
                details: "Model file does not exist".to_string(),
            }
            .into());
        }
        let bytes = read_regular_file(&self.path, "model file", MAX_INPUT_SIZE)?;
        codec::decode(&bytes)
    }
}
