use thiserror::Error;

use crate::{ErrorBody, ErrorKind, GenericError, HttpError, ServiceError};

/// Result of translating a status code into an in-process error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappedError {
    /// The status code has a matching [`ErrorKind`]
    #[error(transparent)]
    Http(#[from] ServiceError),
    /// Any other status code
    #[error(transparent)]
    Generic(#[from] GenericError),
}

impl MappedError {
    /// Kind of the error, if the status code was recognised
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Http(error) => Some(error.kind()),
            Self::Generic(_) => None,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        match self {
            Self::Http(error) => error.message(),
            Self::Generic(error) => error.message(),
        }
    }

    /// JSON body describing the error for API consumers
    pub fn to_body(&self) -> ErrorBody {
        match self {
            Self::Http(error) => error.to_body(),
            Self::Generic(error) => error.to_body(),
        }
    }
}

/// Translate a wire-level status code into an error value
///
/// Never fails: codes without a matching kind produce a [`GenericError`]
/// that carries only the message.
#[track_caller]
pub fn to_error(code: u16, message: Option<&str>) -> MappedError {
    if let Some(kind) = ErrorKind::from_status(code) {
        return ServiceError::new(kind, message).into();
    }

    let message = message.map_or_else(|| format!("Unexpected status code {code}"), str::to_owned);
    GenericError::new(message).into()
}
