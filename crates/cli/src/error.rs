//! Console error model.

use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

/// Failures of the console itself. Bad user input never surfaces here; it is
/// answered with a message and a fresh prompt.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input stream reached end-of-file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
