//! Application configuration.
//!
//! Optional `estately.toml`; every field has a default so the server starts
//! with no file at all. CLI flags override file values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "estately.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub webhooks: WebhookConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_workers")]
    pub max_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_workers: default_workers(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".into()
}
fn default_workers() -> usize {
    8
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("estately.sqlite3")
}

/// `[webhooks]`: the workflow backend. Paths are joined onto `base_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(default = "default_webhook_base")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub endpoints: WebhookEndpoints,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            base_url: default_webhook_base(),
            timeout_secs: default_timeout_secs(),
            endpoints: WebhookEndpoints::default(),
        }
    }
}

fn default_webhook_base() -> String {
    "https://n8n-7k47.onrender.com".into()
}
fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookEndpoints {
    pub signup: String,
    pub verify_email: String,
    pub login: String,
    pub forgot_password: String,
    pub verify_reset_code: String,
    pub reset_password: String,
    pub add_buyer: String,
    pub add_seller: String,
    pub edit_listing: String,
    pub get_sellers: String,
    pub get_buyers: String,
    pub check_price: String,
}

impl Default for WebhookEndpoints {
    fn default() -> Self {
        Self {
            signup: "/webhook/signup".into(),
            verify_email: "/webhook/verify-email".into(),
            login: "/webhook/login".into(),
            forgot_password: "/webhook-test/forgot-password".into(),
            verify_reset_code: "/webhook-test/verify-reset-code".into(),
            reset_password: "/webhook-test/reset-password".into(),
            add_buyer: "/webhook-test/add_user".into(),
            add_seller: "/webhook-test/add_seller".into(),
            edit_listing: "/webhook-test/card_edit".into(),
            get_sellers: "/webhook-test/get_seller".into(),
            get_buyers: "/webhook-test/get_buyer".into(),
            check_price: "/webhook-test/Check_Price".into(),
        }
    }
}

/// `[ai]`: generative model used for agent matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_ai_base")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the env var holding the API key (the key itself is never in the file).
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_max_agents")]
    pub max_agents: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_ai_base(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            max_agents: default_max_agents(),
        }
    }
}

fn default_ai_base() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn default_model() -> String {
    "gemini-2.0-flash".into()
}
fn default_api_key_env() -> String {
    "GEMINI_API_KEY".into()
}
fn default_max_agents() -> usize {
    3
}

impl AiConfig {
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_hours: default_ttl_hours(),
        }
    }
}

fn default_cookie_name() -> String {
    "session".into()
}
fn default_ttl_hours() -> i64 {
    24
}

impl SessionConfig {
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_hours * 60 * 60
    }
}

/// `[site]`: third-party widgets embedded in every page. Empty disables them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub chat_webhook_url: String,
    pub telegram_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            chat_webhook_url:
                "https://n8n-7k47.onrender.com/webhook/bbcdcb38-560e-4b17-a7e8-fb8fa101635f/chat"
                    .into(),
            telegram_url: "http://t.me/Dastgeerbot".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "estately=debug".
    pub level: Option<String>,
}

impl AppConfig {
    /// Load from `path`. A missing file at the default location yields the
    /// defaults; a missing explicitly-requested file is an error.
    pub fn load(path: &Path, explicit: bool) -> Result<Self, ConfigError> {
        if !path.exists() && !explicit {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml(&text).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        Ok(cfg)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let cfg: AppConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.max_workers == 0 {
            return Err(ConfigError::Invalid("server.max_workers must be > 0".into()));
        }
        if self.session.ttl_hours <= 0 {
            return Err(ConfigError::Invalid("session.ttl_hours must be > 0".into()));
        }
        if url::Url::parse(&self.webhooks.base_url).is_err() {
            return Err(ConfigError::Invalid(format!(
                "webhooks.base_url is not a URL: {}",
                self.webhooks.base_url
            )));
        }
        Ok(())
    }
}
