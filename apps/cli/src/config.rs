use anyhow::Result;

/// Application configuration loaded from environment variables.
///
/// Every variable has a sensible default so the tool works out of the box
/// against a local dev server (the backend's default port is 5000).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the HR analysis API, without a trailing slash.
    pub api_base_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: env_or("HRLENS_API_URL", "http://localhost:5000"),
            rust_log: env_or("RUST_LOG", "warn"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
