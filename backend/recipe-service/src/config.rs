/// Configuration management for Recipe Service
///
/// Everything is read once from the environment at process start.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Document store configuration, present only when both
    /// `DATABASE_URL` and `DATABASE_NAME` are set
    pub database: Option<DatabaseConfig>,
    /// Public front-end origin used to build sitemap links
    pub frontend_url: String,
    /// Which store variables were present in the environment
    pub env_presence: EnvPresence,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Number of HTTP worker threads
    pub workers: usize,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string
    pub url: String,
    /// Database name
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EnvPresence {
    pub database_url: bool,
    pub database_name: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let database_url = non_empty_var("DATABASE_URL");
        let database_name = non_empty_var("DATABASE_NAME");
        let env_presence = EnvPresence {
            database_url: database_url.is_some(),
            database_name: database_name.is_some(),
        };

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or_default("PORT", 8000)?,
                workers: parse_env_or_default("HTTP_WORKERS", 4)?,
            },
            cors: {
                let allowed_origins =
                    std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: match (database_url, database_name) {
                (Some(url), Some(name)) => Some(DatabaseConfig { url, name }),
                _ => None,
            },
            frontend_url: std::env::var("FRONTEND_URL").unwrap_or_default(),
            env_presence,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        Err(_) => Ok(default),
    }
}
