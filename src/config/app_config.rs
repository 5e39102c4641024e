use std::{path::PathBuf, time::Duration};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub auth_check_path: String,
    pub auth_check_timeout: Duration,
    pub credential_storage_path: PathBuf,
    pub credential_storage_key: String,
    pub session_cache_max_age: Option<Duration>,
    pub preserve_credential_on_authority_failure: bool,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            auth_check_path: std::env::var("AUTH_CHECK_PATH")
                .unwrap_or_else(|_| "/api/auth/check".to_string()),
            auth_check_timeout: Duration::from_secs(
                std::env::var("AUTH_CHECK_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
            ),
            credential_storage_path: std::env::var("CREDENTIAL_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".session/credentials.json")),
            credential_storage_key: std::env::var("CREDENTIAL_STORAGE_KEY")
                .unwrap_or_else(|_| "token".to_string()),
            session_cache_max_age: std::env::var("SESSION_CACHE_MAX_AGE_SECONDS")
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .map(Duration::from_secs),
            preserve_credential_on_authority_failure: std::env::var(
                "PRESERVE_CREDENTIAL_ON_AUTHORITY_FAILURE",
            )
            .map(|value| parse_flag(&value))
            .unwrap_or(false),
            log_format: match std::env::var("LOG_FORMAT") {
                Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
        }
    }

    pub fn auth_check_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.auth_check_path.trim_start_matches('/')
        )
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
