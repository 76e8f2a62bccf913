pub mod cors;
pub mod security_headers;

pub use cors::{cors_layer, preflight_no_content};
pub use security_headers::with_security_headers;
