use std::collections::HashMap;
use thiserror::Error;

pub const URL_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";
pub const SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const SCHEMA_VAR: &str = "SUPABASE_DB_SCHEMA";

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub anon_key: String,
    pub service_role_key: Option<String>,
    pub schema: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let url = required(&env_map, URL_VAR)?
            .trim_end_matches('/')
            .to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(
                URL_VAR.to_string(),
                format!("must start with http:// or https://, got {}", url),
            ));
        }

        let anon_key = required(&env_map, ANON_KEY_VAR)?;
        let service_role_key = optional(&env_map, SERVICE_ROLE_KEY_VAR);
        let schema = optional(&env_map, SCHEMA_VAR).unwrap_or_else(|| "public".to_string());

        Ok(Config {
            url,
            anon_key,
            service_role_key,
            schema,
        })
    }
}

// Empty values count as unset.
fn optional(env_map: &HashMap<String, String>, name: &str) -> Option<String> {
    env_map
        .get(name)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn required(env_map: &HashMap<String, String>, name: &str) -> Result<String, ConfigError> {
    optional(env_map, name).ok_or_else(|| ConfigError::MissingEnv(name.to_string()))
}
