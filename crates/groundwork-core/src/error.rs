use std::panic::Location;

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::ErrorKind;

/// Trait for errors that can be converted to HTTP responses
///
/// The transport layer reads the status code and the client message off a
/// caught error, keeping domain code decoupled from any HTTP framework.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Discriminant name (e.g. `NotFoundError`)
    fn name(&self) -> &str;

    /// Human-readable message
    fn message(&self) -> &str;

    /// Source location where the error was constructed
    fn trace(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// JSON body describing this error for API consumers
    fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorDetails {
                name: self.name().to_owned(),
                message: self.client_message(),
                code: Some(self.status_code().as_u16()),
            },
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Error details
    pub error: ErrorDetails,
}

/// Error details within an [`ErrorBody`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetails {
    /// Discriminant name
    pub name: String,
    /// Client-facing message
    pub message: String,
    /// HTTP status code, absent for generic errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

/// An error of one of the [`ErrorKind`] variants
///
/// Constructed at the point of failure and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", .kind.name(), .message)]
pub struct ServiceError {
    kind: ErrorKind,
    message: String,
    trace: String,
}

impl ServiceError {
    /// Create an error of the given kind, falling back to the kind's default message
    #[track_caller]
    pub fn new(kind: ErrorKind, message: Option<&str>) -> Self {
        let message = message.unwrap_or_else(|| kind.default_message());
        Self::with_message(kind, message)
    }

    /// Create an error of the given kind with an owned message
    #[track_caller]
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            trace: Location::caller().to_string(),
        }
    }

    /// Shorthand for a [`ErrorKind::Validation`] error
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Validation, message)
    }

    /// Kind of this error
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Construction site as `file:line:column`
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Whether the message may be shown to clients for a 5xx error
    pub const fn is_safe(&self) -> bool {
        self.kind.is_safe()
    }
}

impl HttpError for ServiceError {
    fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    fn name(&self) -> &str {
        self.kind.name()
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn trace(&self) -> &str {
        &self.trace
    }

    fn client_message(&self) -> String {
        if self.kind.status_code().is_server_error() && !self.kind.is_safe() {
            self.kind.default_message().to_owned()
        } else {
            self.message.clone()
        }
    }
}

/// Untyped error carrying only a message
///
/// Produced for status codes that have no matching [`ErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {message}")]
pub struct GenericError {
    message: String,
    trace: String,
}

impl GenericError {
    /// Discriminant name shared by all generic errors
    pub const NAME: &'static str = "Error";

    /// Create a generic error
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: Location::caller().to_string(),
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Construction site as `file:line:column`
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// JSON body describing this error, without a status code
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorDetails {
                name: Self::NAME.to_owned(),
                message: self.message.clone(),
                code: None,
            },
        }
    }
}

/// Precondition violation on a function argument
///
/// Not an HTTP error: it is meant to stay inside the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("IllegalArgumentError: {message}")]
pub struct IllegalArgumentError {
    argument: String,
    message: String,
    trace: String,
}

impl IllegalArgumentError {
    /// Discriminant name
    pub const NAME: &'static str = "IllegalArgumentError";

    /// Create an error for the named argument
    ///
    /// Without a message, `Illegal argument: {argument}` is used.
    #[track_caller]
    pub fn new(argument: impl Into<String>, message: Option<&str>) -> Self {
        let argument = argument.into();
        let message = message.map_or_else(|| format!("Illegal argument: {argument}"), str::to_owned);

        Self {
            argument,
            message,
            trace: Location::caller().to_string(),
        }
    }

    /// Name of the offending argument
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Construction site as `file:line:column`
    pub fn trace(&self) -> &str {
        &self.trace
    }
}
