//! Structural inspection of values that may or may not be errors
//!
//! Values arriving from untyped boundaries (deserialized JSON, records built
//! by foreign code) are checked attribute by attribute rather than trusted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ErrorKind, GenericError, HttpError, IllegalArgumentError, MappedError, ServiceError};

/// Borrowed view of the attributes an error value exposes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ErrorView<'a> {
    /// Trace context
    pub stack: Option<&'a str>,
    /// Human-readable message
    pub message: Option<&'a str>,
    /// Discriminant name
    pub name: Option<&'a str>,
    /// Numeric status code
    pub status_code: Option<u16>,
}

/// Anything that can be inspected as a possible error
///
/// `view` returns `None` when the value itself is absent (`None`, JSON
/// `null`).
pub trait ErrorShape {
    /// Attributes of the value, if present
    fn view(&self) -> Option<ErrorView<'_>>;
}

/// Plain record with every error attribute optional
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    /// Trace context
    #[serde(default)]
    pub stack: Option<String>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Discriminant name
    #[serde(default)]
    pub name: Option<String>,
    /// Numeric status code
    #[serde(default)]
    pub status_code: Option<u16>,
}

impl From<&ServiceError> for ErrorRecord {
    fn from(error: &ServiceError) -> Self {
        Self {
            stack: Some(error.trace().to_owned()),
            message: Some(error.message().to_owned()),
            name: Some(error.kind().name().to_owned()),
            status_code: Some(error.status_code().as_u16()),
        }
    }
}

impl ErrorShape for ErrorRecord {
    fn view(&self) -> Option<ErrorView<'_>> {
        Some(ErrorView {
            stack: self.stack.as_deref(),
            message: self.message.as_deref(),
            name: self.name.as_deref(),
            status_code: self.status_code,
        })
    }
}

impl ErrorShape for ServiceError {
    fn view(&self) -> Option<ErrorView<'_>> {
        Some(ErrorView {
            stack: Some(self.trace()),
            message: Some(self.message()),
            name: Some(self.kind().name()),
            status_code: Some(self.status_code().as_u16()),
        })
    }
}

impl ErrorShape for GenericError {
    fn view(&self) -> Option<ErrorView<'_>> {
        Some(ErrorView {
            stack: Some(self.trace()),
            message: Some(self.message()),
            name: Some(Self::NAME),
            status_code: None,
        })
    }
}

impl ErrorShape for IllegalArgumentError {
    fn view(&self) -> Option<ErrorView<'_>> {
        Some(ErrorView {
            stack: Some(self.trace()),
            message: Some(self.message()),
            name: Some(Self::NAME),
            status_code: None,
        })
    }
}

impl ErrorShape for MappedError {
    fn view(&self) -> Option<ErrorView<'_>> {
        match self {
            Self::Http(error) => error.view(),
            Self::Generic(error) => error.view(),
        }
    }
}

impl ErrorShape for Value {
    fn view(&self) -> Option<ErrorView<'_>> {
        match self {
            Self::Null => None,
            Self::Object(map) => Some(ErrorView {
                stack: map.get("stack").and_then(Value::as_str),
                message: map.get("message").and_then(Value::as_str),
                name: map.get("name").and_then(Value::as_str),
                status_code: map
                    .get("statusCode")
                    .and_then(Value::as_u64)
                    .and_then(|code| u16::try_from(code).ok()),
            }),
            _ => Some(ErrorView::default()),
        }
    }
}

impl<T: ErrorShape> ErrorShape for Option<T> {
    fn view(&self) -> Option<ErrorView<'_>> {
        self.as_ref().and_then(ErrorShape::view)
    }
}

impl<T: ErrorShape + ?Sized> ErrorShape for &T {
    fn view(&self) -> Option<ErrorView<'_>> {
        (**self).view()
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}

/// Check whether a value is an HTTP error of the given kind
///
/// The value must carry a non-empty trace and message, a non-zero status
/// code and the kind's discriminant name.
pub fn is_error_kind<E: ErrorShape + ?Sized>(value: &E, kind: ErrorKind) -> bool {
    value.view().is_some_and(|view| {
        has_text(view.stack)
            && has_text(view.message)
            && view.status_code.is_some_and(|code| code != 0)
            && view.name == Some(kind.name())
    })
}

/// Check whether a value is a `NotFoundError`
pub fn is_not_found_error<E: ErrorShape + ?Sized>(value: &E) -> bool {
    is_error_kind(value, ErrorKind::NotFound)
}

/// Check whether a value is a `ForbiddenError`
pub fn is_forbidden_error<E: ErrorShape + ?Sized>(value: &E) -> bool {
    is_error_kind(value, ErrorKind::Forbidden)
}

/// Check whether a value is a `ValidationError`
pub fn is_validation_error<E: ErrorShape + ?Sized>(value: &E) -> bool {
    is_error_kind(value, ErrorKind::Validation)
}

/// Check whether a value is a `BadRequestError`
pub fn is_bad_request_error<E: ErrorShape + ?Sized>(value: &E) -> bool {
    is_error_kind(value, ErrorKind::BadRequest)
}

/// Check whether a value is a `ConflictError`
pub fn is_conflict_error<E: ErrorShape + ?Sized>(value: &E) -> bool {
    is_error_kind(value, ErrorKind::Conflict)
}

/// Check whether a value is an `UnsupportedMediaTypeError`
pub fn is_unsupported_media_type_error<E: ErrorShape + ?Sized>(value: &E) -> bool {
    is_error_kind(value, ErrorKind::UnsupportedMediaType)
}

/// Check whether a value is an `InternalServerError`
pub fn is_internal_server_error<E: ErrorShape + ?Sized>(value: &E) -> bool {
    is_error_kind(value, ErrorKind::InternalServer)
}

/// Check whether a value is a `NotImplementedError`
pub fn is_not_implemented_error<E: ErrorShape + ?Sized>(value: &E) -> bool {
    is_error_kind(value, ErrorKind::NotImplemented)
}

/// Check whether a value is an `IllegalArgumentError`
///
/// Same rules as the HTTP predicates, minus the status code.
pub fn is_illegal_argument_error<E: ErrorShape + ?Sized>(value: &E) -> bool {
    value.view().is_some_and(|view| {
        has_text(view.stack) && has_text(view.message) && view.name == Some(IllegalArgumentError::NAME)
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use strum::IntoEnumIterator;

    use super::*;

    fn predicate(kind: ErrorKind) -> fn(&ServiceError) -> bool {
        match kind {
            ErrorKind::NotFound => is_not_found_error,
            ErrorKind::Forbidden => is_forbidden_error,
            ErrorKind::Validation => is_validation_error,
            ErrorKind::BadRequest => is_bad_request_error,
            ErrorKind::Conflict => is_conflict_error,
            ErrorKind::UnsupportedMediaType => is_unsupported_media_type_error,
            ErrorKind::InternalServer => is_internal_server_error,
            ErrorKind::NotImplemented => is_not_implemented_error,
        }
    }

    #[test]
    fn predicates_match_only_their_own_kind() {
        for kind in ErrorKind::iter() {
            let check = predicate(kind);
            for other in ErrorKind::iter() {
                let error = ServiceError::new(other, Some("just a test"));
                assert_eq!(check(&error), kind == other, "{kind:?} vs {other:?}");
            }
        }
    }

    #[test]
    fn absent_values_are_rejected() {
        assert!(!is_not_found_error(&None::<ServiceError>));
        assert!(!is_not_found_error(&Value::Null));
        assert!(!is_not_found_error(&json!({})));
        assert!(!is_not_found_error(&json!("NotFoundError")));
        assert!(!is_not_found_error(&ErrorRecord::default()));
    }

    #[test]
    fn partial_records_are_rejected() {
        assert!(!is_validation_error(&json!({"stack": "foo"})));
        assert!(!is_validation_error(&json!({"stack": "foo", "message": "bar"})));
        assert!(!is_validation_error(&json!({"stack": "foo", "message": "bar", "name": "baz"})));
        assert!(!is_validation_error(
            &json!({"stack": "foo", "message": "bar", "name": "ValidationError"})
        ));
        assert!(!is_validation_error(
            &json!({"stack": "", "message": "bar", "name": "ValidationError", "statusCode": 400})
        ));
        assert!(!is_validation_error(
            &json!({"stack": "foo", "message": "bar", "name": "ValidationError", "statusCode": 0})
        ));
    }

    #[test]
    fn complete_records_are_accepted() {
        assert!(is_validation_error(
            &json!({"stack": "foo", "message": "bar", "name": "ValidationError", "statusCode": 400})
        ));

        let record: ErrorRecord =
            serde_json::from_value(json!({"stack": "s", "message": "m", "name": "ForbiddenError", "statusCode": 403}))
                .unwrap();
        assert!(is_forbidden_error(&record));
        assert!(is_forbidden_error(&Some(record)));
    }

    #[test]
    fn record_from_service_error_keeps_shape() {
        let error = ServiceError::new(ErrorKind::Conflict, None);
        let record = ErrorRecord::from(&error);
        assert!(is_conflict_error(&record));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["statusCode"], 409);
        assert!(is_conflict_error(&value));
    }

    #[test]
    fn empty_message_is_rejected() {
        let error = ServiceError::new(ErrorKind::NotFound, Some(""));
        assert!(!is_not_found_error(&error));
    }

    #[test]
    fn illegal_argument_predicate() {
        let error = IllegalArgumentError::new("limit", Some("limit must be positive"));
        assert!(is_illegal_argument_error(&error));
        assert!(!is_illegal_argument_error(&ServiceError::new(ErrorKind::BadRequest, None)));
        assert!(!is_bad_request_error(&error));
        assert!(is_illegal_argument_error(
            &json!({"stack": "s", "message": "m", "name": "IllegalArgumentError"})
        ));
    }
}
