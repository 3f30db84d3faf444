/// Filesystem adapters for reading models and writing output
mod file_writer;
mod model_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use model_reader::ModelFileReader;
