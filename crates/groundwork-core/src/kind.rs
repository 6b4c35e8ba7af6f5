use http::StatusCode;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Closed set of HTTP-flavoured error kinds
///
/// The string form of each kind is its discriminant name, which is what the
/// `is_*` predicates compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum ErrorKind {
    /// A resource cannot be found
    #[strum(serialize = "NotFoundError")]
    NotFound,
    /// The requested operation is not allowed
    #[strum(serialize = "ForbiddenError")]
    Forbidden,
    /// Input failed validation
    #[strum(serialize = "ValidationError")]
    Validation,
    /// The request is malformed
    #[strum(serialize = "BadRequestError")]
    BadRequest,
    /// The request conflicts with the current state of a resource
    #[strum(serialize = "ConflictError")]
    Conflict,
    /// The payload format is not supported
    #[strum(serialize = "UnsupportedMediaTypeError")]
    UnsupportedMediaType,
    /// Unexpected failure on the serving side
    #[strum(serialize = "InternalServerError")]
    InternalServer,
    /// The operation exists but has no implementation
    #[strum(serialize = "NotImplementedError")]
    NotImplemented,
}

impl ErrorKind {
    /// HTTP status code carried by errors of this kind
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Validation | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::InternalServer => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }

    /// Discriminant name (e.g. `NotFoundError`)
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Message used when an error is built without one
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::NotFound => "Not found",
            Self::Forbidden => "Forbidden",
            Self::Validation => "Validation error",
            Self::BadRequest => "Bad request",
            Self::Conflict => "Conflict",
            Self::UnsupportedMediaType => "Unsupported media type",
            Self::InternalServer => "Internal server error",
            Self::NotImplemented => "Not implemented",
        }
    }

    /// Whether the message of a server-side error may be shown to clients
    ///
    /// Client errors (4xx) always expose their message. Of the 5xx kinds only
    /// `NotImplemented` does.
    pub const fn is_safe(self) -> bool {
        matches!(self, Self::NotImplemented)
    }

    /// Map a wire-level status code to a kind
    ///
    /// 400 maps to [`ErrorKind::BadRequest`]; validation failures are only
    /// ever produced in-process.
    pub const fn from_status(code: u16) -> Option<Self> {
        let kind = match code {
            400 => Self::BadRequest,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            415 => Self::UnsupportedMediaType,
            500 => Self::InternalServer,
            501 => Self::NotImplemented,
            _ => return None,
        };

        Some(kind)
    }
}
