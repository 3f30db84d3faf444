use crate::dependency_model::domain::GradleModel;
use crate::shared::Result;

/// ModelFormatter port for rendering an extracted model
///
/// Implementations exist for the JSON tooling form, the binary blob and a
/// human-readable dependency tree.
pub trait ModelFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &GradleModel) -> Result<Vec<u8>>;
}
