//! Tooling form of the model: the flat representation exchanged with the
//! build host process, and the conversions to and from it.
pub mod codec;
pub mod data;
mod from_marker;
mod to_marker;

pub use from_marker::{
    buildscript_data, configuration_data, dependency_data, from_marker, project_data, settings_data,
};
pub use to_marker::{
    buildscript_to_marker, configuration_to_marker, dependency_to_marker, project_to_marker,
    settings_to_marker, to_marker,
};
