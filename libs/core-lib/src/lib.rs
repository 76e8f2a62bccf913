use http::StatusCode;
use std::error::Error as StdError;

// Declare modules
pub mod envelope;

pub use envelope::ApiResponse;

/// Message sent to clients for every failure that is not an [`CoreError::Application`].
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong on the server";

/// Two-tier error taxonomy shared by every request handler.
///
/// `Application` errors are raised on purpose and are shown to the client
/// verbatim. Everything else lands in `Unknown` and is only ever visible in
/// the server log.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("{message} ({status})")]
    Application { status: StatusCode, message: String },
    #[error("Unrecognized failure: {0}")]
    Unknown(#[from] Box<dyn StdError + Send + Sync>),
}

impl CoreError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        CoreError::Application {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Wraps any failure that was not raised on purpose.
    pub fn unknown<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        CoreError::Unknown(err.into())
    }

    pub fn is_application(&self) -> bool {
        matches!(self, CoreError::Application { .. })
    }

    /// Status code the client receives for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::Application { status, .. } => *status,
            CoreError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message the client receives; internal detail never leaks through here.
    pub fn public_message(&self) -> &str {
        match self {
            CoreError::Application { message, .. } => message,
            CoreError::Unknown(_) => GENERIC_FAILURE_MESSAGE,
        }
    }

    /// Envelope sent back for this error. `data` is always null.
    pub fn to_envelope(&self) -> ApiResponse<()> {
        ApiResponse::failure(self.public_message())
    }
}
