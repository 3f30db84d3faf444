/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven ports exist: the build host, model connections and the
/// output side. The use cases are called directly by the CLI.
pub mod outbound;
