//! Gradle dependency model: domain types, the services that build them
//! from a host and the policies those services apply.
pub mod domain;
pub mod policies;
pub mod services;
