//! Shared error taxonomy
//!
//! A closed set of HTTP-flavoured error kinds, a single error record type
//! carrying one of them, and predicates that recognise those errors in
//! values coming from untyped boundaries.

#![allow(clippy::must_use_candidate)]

mod error;
mod kind;
mod shape;
mod status;

pub use error::{ErrorBody, ErrorDetails, GenericError, HttpError, IllegalArgumentError, ServiceError};
pub use kind::ErrorKind;
pub use shape::{
    ErrorRecord, ErrorShape, ErrorView, is_bad_request_error, is_conflict_error, is_error_kind, is_forbidden_error,
    is_illegal_argument_error, is_internal_server_error, is_not_found_error, is_not_implemented_error,
    is_unsupported_media_type_error, is_validation_error,
};
pub use status::{MappedError, to_error};
