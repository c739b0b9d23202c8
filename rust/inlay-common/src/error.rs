use thiserror::Error;

/// The error type shared by all inlay-* crates.
///
/// Every variant of [`ErrorKind`] is a programming-error diagnostic, not an
/// expected runtime condition: none of them are retried and all of them are
/// surfaced synchronously at the offending call. The kind is boxed so that
/// `Result<T>` stays pointer-thin on the traversal hot path; an allocation
/// happens only once the traversal has already failed.
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

    /// The context has no implementation for the named operation
    /// (e.g. removal from a pure generator).
    #[cold]
    pub fn unsupported_operation(name: impl Into<String>) -> Error {
        Error(ErrorKind::UnsupportedOperation { name: name.into() }.into())
    }

    /// The traversal protocol was invoked out of its linear order.
    #[cold]
    pub fn invalid_state(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidState {
                message: message.into(),
            }
            .into(),
        )
    }

    /// A stale snapshot of a traversal was stepped after a newer copy had
    /// already progressed.
    #[cold]
    pub fn backtrack_detected(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::BacktrackDetected {
                message: message.into(),
            }
            .into(),
        )
    }

    /// Value extraction was attempted on an absent element.
    #[cold]
    pub fn empty_access() -> Error {
        Error(ErrorKind::EmptyAccess.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("unsupported operation: {name}")]
    UnsupportedOperation { name: String },

    #[error("invalid traversal state: {message}")]
    InvalidState { message: String },

    #[error("backtrack detected: {message}")]
    BacktrackDetected { message: String },

    #[error("no element to access")]
    EmptyAccess,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
