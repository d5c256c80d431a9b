use std::path::PathBuf;
use thiserror::Error;

/// I/O failures that abort the command in progress.
///
/// A user cancelling a prompt is not an error and never produces one.
#[derive(Error, Debug)]
pub enum PadError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PadError>;
