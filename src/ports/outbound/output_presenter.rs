use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the formatted model is presented. Content is raw bytes because
/// the binary format is not UTF-8.
pub trait OutputPresenter {
    /// Presents the formatted model to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The output path is a symbolic link or its parent is missing
    fn present(&self, content: &[u8]) -> Result<()>;
}
