use crate::dependency_model::domain::GradleModel;
use crate::shared::Result;

/// ModelConnection port for obtaining a model built in another process
///
/// The producer side flattens the model, encodes it and ships the bytes;
/// implementations of this port fetch and decode them.
pub trait ModelConnection {
    /// # Errors
    /// Returns an error if the model cannot be fetched or does not decode.
    /// Failed configurations inside a decoded model are not errors.
    fn fetch_model(&self) -> Result<GradleModel>;
}
