use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use core_lib::CoreError;
use serde::Serialize;

use super::error::ApiError;

/// Largest request body accepted by JSON handlers (100 KiB).
pub const JSON_BODY_LIMIT_BYTES: usize = 100 * 1024;

/// `axum::Json` whose rejections go through the error envelope instead of
/// axum's plain-text bodies. A body that cannot be read or parsed was not
/// rejected on purpose by a handler, so it is answered with the generic 500
/// and the parser detail only reaches the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(CoreError::unknown(rejection).into()),
        }
    }
}

impl<T> IntoResponse for ApiJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}
