use crate::server::error::config::ConfigError;

/// Address the HTTP listener binds to when `BIND_ADDRESS` is unset
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Base URL used for short links when `PUBLIC_URL` is unset
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: String,
    /// Base URL for short links, stored without a trailing slash
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables were present
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - `PUBLIC_URL` is not an http(s) URL
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let public_url = lookup("PUBLIC_URL").unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string());
        if !(public_url.starts_with("http://") || public_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: "PUBLIC_URL".to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            valkey_url: require("VALKEY_URL")?,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            public_url: public_url.trim_end_matches('/').to_string(),
        })
    }
}
