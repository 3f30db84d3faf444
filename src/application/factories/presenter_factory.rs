use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Factory for creating output presenters
///
/// `None` means stdout; any path gets the checked file writer.
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(output: Option<PathBuf>) -> Box<dyn OutputPresenter> {
        match output {
            Some(path) => Box::new(FileSystemWriter::new(path)),
            None => Box::new(StdoutPresenter::new()),
        }
    }
}
