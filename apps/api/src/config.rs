use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_IDENTITY_HEADER: &str = "x-user-id";
const DEFAULT_FALLBACK_USER_ID: &str = "local-user";
const DEFAULT_MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024;
const DEFAULT_MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string. When unset the service keeps résumés in memory.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Header carrying the caller identity resolved by the upstream identity provider.
    pub identity_header: String,
    /// Identity used when no identity header is present.
    pub fallback_user_id: String,
    /// Origin used to build public share links (`<origin>/u/<slug>`).
    pub public_base_url: String,
    pub max_photo_bytes: usize,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = parse_env("PORT", DEFAULT_PORT)?;

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            identity_header: optional_env("IDENTITY_HEADER")
                .unwrap_or_else(|| DEFAULT_IDENTITY_HEADER.to_string())
                .to_ascii_lowercase(),
            fallback_user_id: optional_env("FALLBACK_USER_ID")
                .unwrap_or_else(|| DEFAULT_FALLBACK_USER_ID.to_string()),
            public_base_url: optional_env("PUBLIC_BASE_URL")
                .unwrap_or_else(|| format!("http://localhost:{port}")),
            max_photo_bytes: parse_env("MAX_PHOTO_BYTES", DEFAULT_MAX_PHOTO_BYTES)?,
            max_body_bytes: parse_env("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            identity_header: DEFAULT_IDENTITY_HEADER.to_string(),
            fallback_user_id: DEFAULT_FALLBACK_USER_ID.to_string(),
            public_base_url: format!("http://localhost:{DEFAULT_PORT}"),
            max_photo_bytes: DEFAULT_MAX_PHOTO_BYTES,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Returns the variable when it is set to something other than whitespace.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
