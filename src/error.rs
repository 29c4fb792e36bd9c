use {
    crate::constants::*,
    http::status::StatusCode,
    scratchstack_errors::ServiceError,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// Error returned when a request cannot be canonicalized for AWS SigV4 validation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum SignatureError {
    /// A header listed in `SignedHeaders` is not present in the request. The client is either
    /// malformed or attempting a forgery; the request must not be canonicalized with a default
    /// value.
    MissingRequiredSignedHeader(/* header name */ String),
}

impl SignatureError {
    /// The AWS error code to report to the client.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRequiredSignedHeader(_) => ERR_CODE_SIGNATURE_DOES_NOT_MATCH,
        }
    }

    /// The HTTP status to report to the client.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::MissingRequiredSignedHeader(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl ServiceError for SignatureError {
    fn error_code(&self) -> &'static str {
        SignatureError::error_code(self)
    }

    fn http_status(&self) -> StatusCode {
        SignatureError::http_status(self)
    }
}

impl Display for SignatureError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::MissingRequiredSignedHeader(header) => write!(f, "{}{}", MSG_SIGNED_HEADER_MISSING, header),
        }
    }
}

impl Error for SignatureError {}
