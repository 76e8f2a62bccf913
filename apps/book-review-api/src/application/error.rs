use axum::{
    Json,
    response::{IntoResponse, Response},
};
use core_lib::CoreError;
use std::any::Any;
use tracing::{error, warn};

/// Terminal stage of every failing request.
///
/// Handlers return `ApiResult<T>` and bubble failures up with `?`; the
/// conversion to an HTTP response happens exactly once, here. Recognized
/// application errors keep their status and message, everything else becomes
/// a generic 500. Both kinds are logged before the response is built.
#[derive(Debug)]
pub struct ApiError(CoreError);

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn inner(&self) -> &CoreError {
        &self.0
    }

    pub fn into_inner(self) -> CoreError {
        self.0
    }
}

impl<E> From<E> for ApiError
where
    E: Into<CoreError>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        match &err {
            CoreError::Application { status, message } => {
                warn!(status = status.as_u16(), %message, "request failed with application error");
            }
            CoreError::Unknown(source) => {
                error!(error = ?source, "request failed with unrecognized error");
            }
        }
        (err.status(), Json(err.to_envelope())).into_response()
    }
}

/// Turns a handler panic into the same 500 envelope as any other unrecognized failure.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };
    ApiError::from(CoreError::unknown(format!("handler panicked: {detail}"))).into_response()
}
