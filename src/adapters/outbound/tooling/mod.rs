/// Tooling adapters delivering a model built by a separate helper process
mod connection;
mod stager;

pub use connection::{ToolingConnection, DEFAULT_INIT_SCRIPT, INIT_SCRIPT_NAME};
pub use stager::ProjectStager;
