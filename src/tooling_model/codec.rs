//! Binary and JSON encodings of the tooling form.
//!
//! The binary blob is MessagePack with named fields, so a newer reader
//! tolerates fields it does not know about.
use super::data::GradleModelData;
use super::{from_marker, to_marker};
use crate::dependency_model::domain::GradleModel;
use crate::shared::error::ExtractionError;
use crate::shared::Result;

pub fn encode(model: &GradleModel) -> Result<Vec<u8>> {
    let data = from_marker(model);
    rmp_serde::to_vec_named(&data).map_err(|e| {
        ExtractionError::Validation {
            message: format!("Failed to encode model: {}", e),
        }
        .into()
    })
}

/// # Errors
/// Returns [`ExtractionError::ModelDecode`] for truncated or foreign bytes.
pub fn decode(bytes: &[u8]) -> Result<GradleModel> {
    let data: GradleModelData = rmp_serde::from_slice(bytes).map_err(|e| ExtractionError::ModelDecode {
        details: e.to_string(),
    })?;
    to_marker(&data).map_err(|e| {
        ExtractionError::ModelDecode {
            details: format!("{:#}", e),
        }
        .into()
    })
}

pub fn to_json(model: &GradleModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(&from_marker(model))?)
}

pub fn from_json(json: &str) -> Result<GradleModel> {
    let data: GradleModelData = serde_json::from_str(json).map_err(|e| ExtractionError::ModelDecode {
        details: e.to_string(),
    })?;
    to_marker(&data)
}
