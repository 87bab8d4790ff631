use std::result;

use thiserror::Error;

/// A type alias for handling errors related to the designer.
pub type Result<T> = result::Result<T, DesignerError>;

/// An error that can occur while the designer runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DesignerError {
    /// An error when there is an IO exception.
    #[error("IO exception, {0}")]
    InvalidIo(String),
    /// An error while parsing or executing a layout script.
    #[error("line {line}: {reason}")]
    Script { line: usize, reason: String },
    /// A constraint referenced a widget that is not part of the layout.
    #[error("'{0}' does not refer to a widget in this layout")]
    UnknownReference(String),
    /// An error to represent generic errors.
    #[error("Error, {0}")]
    GenericError(String),
}

impl DesignerError {
    /// Create a new [`DesignerError::Script`] tagged with the offending line.
    pub fn script<R: Into<String>>(line: usize, reason: R) -> Self {
        DesignerError::Script {
            line,
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for DesignerError {
    fn from(err: std::io::Error) -> Self {
        DesignerError::InvalidIo(err.to_string())
    }
}
