use anyhow::{Context, Result};

/// Fallback used when `SESSION_SECRET` is not set. Only suitable for development.
pub const DEV_SESSION_SECRET: &str = "dev-secret-key";

pub const DEFAULT_TRANSLATE_API_URL: &str =
    "https://translation.googleapis.com/language/translate/v2";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Sessions
    pub session_secret: String,

    // Translation
    pub google_translate_api_key: Option<String>,
    pub translate_api_url: String,
    pub translate_timeout_secs: u64,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("PORT must be a valid port number, got '{}'", value))?,
                Err(_) => 5000,
            },

            // Sessions
            session_secret: std::env::var("SESSION_SECRET")
                .unwrap_or_else(|_| DEV_SESSION_SECRET.to_string()),

            // Translation
            google_translate_api_key: std::env::var("GOOGLE_TRANSLATE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),
            translate_timeout_secs: std::env::var("TRANSLATE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),

            // Logging
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
        })
    }

    /// Socket address string the web server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_dev_session_secret(&self) -> bool {
        self.session_secret == DEV_SESSION_SECRET
    }
}
