//! Application configuration

use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Database
    pub database_url: String,
    pub database_max_connections: u32,

    // Alias domains
    /// Ordered list of domains every user can mint aliases under.
    pub alias_domains: Vec<String>,
    /// When set, global-domain suffixes are bare `@domain` with no random word.
    pub disable_alias_suffix: bool,
    /// File holding the suffix word list, one word per line.
    pub words_file_path: String,

    // Quota
    pub max_aliases_free_plan: i64,

    // Authentication
    pub api_key_hmac_secret: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),

            // Database
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .unwrap_or(20),

            // Alias domains
            alias_domains: {
                let raw = env::var("ALIAS_DOMAINS")
                    .map_err(|_| ConfigError::Missing("ALIAS_DOMAINS"))?;
                let domains: Vec<String> = raw
                    .split(',')
                    .map(|d| d.trim().to_lowercase())
                    .filter(|d| !d.is_empty())
                    .collect();
                if domains.is_empty() {
                    return Err(ConfigError::EmptyDomainList);
                }
                domains
            },
            disable_alias_suffix: env::var("DISABLE_ALIAS_SUFFIX")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            words_file_path: env::var("WORDS_FILE_PATH")
                .unwrap_or_else(|_| "local_data/words_alpha.txt".to_string()),

            // Quota
            max_aliases_free_plan: env::var("MAX_ALIASES_FREE_PLAN")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),

            // Authentication
            api_key_hmac_secret: {
                let secret = env::var("API_KEY_HMAC_SECRET")
                    .map_err(|_| ConfigError::Missing("API_KEY_HMAC_SECRET"))?;
                if secret.len() < 32 {
                    return Err(ConfigError::WeakSecret(
                        "API_KEY_HMAC_SECRET must be at least 32 characters",
                    ));
                }
                secret
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Weak secret: {0}")]
    WeakSecret(&'static str),
    #[error("ALIAS_DOMAINS must list at least one domain")]
    EmptyDomainList,
}
