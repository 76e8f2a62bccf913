use http::HeaderValue;
use std::fmt;
use std::net::SocketAddr;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://your-frontend-url.com";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CORS_ALLOWED_ORIGINS contains an invalid origin: {0:?}")]
    InvalidOrigin(String),
}

/// Deployment environment, read from `NODE_ENV`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
    Other(String),
}

impl Environment {
    /// Reads `NODE_ENV` on its own so logging can be set up before the rest of the config.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("NODE_ENV")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(|raw| Environment::parse(&raw))
            .unwrap_or_default()
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "development" => Environment::Development,
            "production" => Environment::Production,
            "test" => Environment::Test,
            other => Environment::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
            Environment::Other(name) => name,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide settings. Built once in `main` and handed to whoever needs them.
#[derive(Clone)]
pub struct Config {
    pub environment: Environment,
    pub port: u16,
    pub jwt_secret: String,
    pub cors_allowed_origins: Vec<HeaderValue>,
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first if a `.env` file should apply.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    /// Unset and empty variables both fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = Environment::from_lookup(&lookup);

        let port = read("PORT").map_or(DEFAULT_PORT, |raw| parse_port(&raw));

        let jwt_secret = read("JWT_SECRET").unwrap_or_default();

        let cors_allowed_origins = match read("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => vec![HeaderValue::from_static(DEFAULT_CORS_ORIGIN)],
        };

        Ok(Self {
            environment,
            port,
            jwt_secret,
            cors_allowed_origins,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            port: DEFAULT_PORT,
            jwt_secret: String::new(),
            cors_allowed_origins: vec![HeaderValue::from_static(DEFAULT_CORS_ORIGIN)],
        }
    }
}

// Keep the secret out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.jwt_secret.is_empty() {
            "<empty>"
        } else {
            "<redacted>"
        };
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("port", &self.port)
            .field("jwt_secret", &secret)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

// Anything that is not a usable port number, 0 included, means the default.
fn parse_port(raw: &str) -> u16 {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            warn!(port = raw, "PORT is not a valid port number, using {}", DEFAULT_PORT);
            DEFAULT_PORT
        }
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            let origin = origin.trim_end_matches('/');
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(ConfigError::InvalidOrigin(origin.to_string()));
            }
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect()
}
