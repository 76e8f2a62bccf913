use serde::{Deserialize, Serialize};

/// Uniform JSON body returned by every endpoint and every error path:
/// `{ "message": ..., "data": ..., "isSuccess": ... }`.
///
/// Fields are private so a failure envelope can never be built with data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    message: String,
    data: Option<T>,
    is_success: bool,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            is_success: true,
        }
    }

    /// Successful response with `data: null`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            is_success: true,
        }
    }

    /// Failed response. `data` is always null.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            is_success: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }
}
