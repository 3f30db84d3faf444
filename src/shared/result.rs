/// Result alias used at the application boundary.
/// Errors carry an `ExtractionError` or context-wrapped host failures.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
