// Declare sub-modules within the application layer
pub mod error;
pub mod extract;
pub mod middleware;

pub use error::{ApiError, ApiResult};
pub use extract::ApiJson;
