use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Environment;

const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter;
/// production writes one JSON object per line.
pub fn init(environment: &Environment) -> Result<(), SetGlobalDefaultError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = FmtSubscriber::builder().with_env_filter(filter);

    if environment.is_production() {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    }
}
