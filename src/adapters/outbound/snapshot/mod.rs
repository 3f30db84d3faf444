/// Snapshot adapters: a recorded build served through the ProjectSource port
mod reader;
mod schema;
mod source;

pub use reader::SnapshotReader;
pub use schema::{BuildSnapshot, ConfigurationSnapshot, ModuleSnapshot, SettingsSnapshot};
pub use source::SnapshotProjectSource;
