use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn index_out_of_range(index: usize, capacity: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { index, capacity }.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }
}

/// All errors are caller-contract violations surfaced before any mutation
/// takes place; there are no recoverable or transient kinds.
#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} out of range for capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
