use std::env;
use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: String,
    pub completion_model: String,
    pub question_language: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: non_empty_var("DATABASE_URL"),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(10),
            openai_api_key: non_empty_var("OPENAI_API_KEY").map(SecretString::from),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_BASE.to_string()),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string()),
            question_language: env::var("QUESTION_LANGUAGE")
                .unwrap_or_else(|_| "Russian".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }

    /// Checks configuration the process cannot start without.
    ///
    /// A missing completion API key is only logged: uploads and listings keep
    /// working and generation requests report the key as missing.
    pub fn validate(&self) -> AppResult<()> {
        if self.database_url.is_none() {
            return Err(AppError::Configuration(
                "Database not configured".to_string(),
            ));
        }

        if self.db_max_connections == 0 {
            return Err(AppError::Configuration(
                "DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        if self.openai_api_key.is_none() {
            log::warn!("OPENAI_API_KEY is not set; question generation is disabled");
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            database_url: Some("postgres://localhost:5432/examgen-test".to_string()),
            db_max_connections: 2,
            openai_api_key: Some(SecretString::from("test-api-key".to_string())),
            openai_api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            question_language: "English".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            max_upload_bytes: 1024 * 1024,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.completion_model.is_empty());
        assert!(!config.web_server_host.is_empty());
        assert!(config.max_upload_bytes > 0);
    }

    #[test]
    fn test_test_config_is_valid() {
        let config = Config::test_config();

        assert!(config.validate().is_ok());
        assert_eq!(config.completion_model, "gpt-4o-mini");
    }

    #[test]
    fn test_missing_database_url_fails_validation() {
        let mut config = Config::test_config();
        config.database_url = None;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        assert!(err.to_string().contains("Database not configured"));
    }

    #[test]
    fn test_missing_api_key_is_not_fatal() {
        let mut config = Config::test_config();
        config.openai_api_key = None;

        assert!(config.validate().is_ok());
    }
}
