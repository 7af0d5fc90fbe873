use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr, time::Duration};
use url::Url;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

/// Body encoding used when relaying a contact message.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RelayEncoding {
    /// `application/json` with `name`, `email`, `message`.
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`, prefixed with `form-name`.
    Form,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(skip_deserializing, default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub contact_endpoint: Option<String>,

    #[serde(default)]
    pub contact_encoding: RelayEncoding,

    #[serde(default = "default_form_name")]
    pub contact_form_name: String,

    #[serde(default = "default_contact_timeout")]
    pub contact_timeout_secs: u64,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Site".to_string()
}
fn default_form_name() -> String {
    "contact".to_string()
}
fn default_contact_timeout() -> u64 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            contact_endpoint: None,
            contact_encoding: RelayEncoding::default(),
            contact_form_name: default_form_name(),
            contact_timeout_secs: default_contact_timeout(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(Environment::with_prefix("APP").prefix_separator("_").try_parsing(true).ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        if config.contact_endpoint.is_none() {
            config.contact_endpoint = env::var("APP_CONTACT_ENDPOINT").ok();
        }
        // A blank endpoint means the relay is switched off.
        config.contact_endpoint = config
            .contact_endpoint
            .take()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.contact_endpoint_url() {
            errors.push(e.to_string());
        }
        if self.contact_timeout_secs == 0 {
            errors.push("CONTACT_TIMEOUT_SECS must be greater than zero".to_string());
        }
        if self.contact_encoding == RelayEncoding::Form && self.contact_form_name.trim().is_empty() {
            errors.push("CONTACT_FORM_NAME cannot be empty for form encoding".to_string());
        }
        if self.is_production() && self.contact_endpoint.is_none() {
            tracing::warn!("No contact endpoint configured in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    /// Parsed relay endpoint, `None` when the relay is not configured.
    pub fn contact_endpoint_url(&self) -> Result<Option<Url>, ConfigError> {
        let Some(raw) = self.contact_endpoint.as_deref() else {
            return Ok(None);
        };

        let url = Url::parse(raw)
            .map_err(|e| ConfigError::Message(format!("CONTACT_ENDPOINT is not a valid URL: {}", e)))?;

        match url.scheme() {
            "http" | "https" => Ok(Some(url)),
            other => Err(ConfigError::Message(format!(
                "CONTACT_ENDPOINT must use http or https, got '{}'",
                other
            ))),
        }
    }

    pub fn contact_timeout(&self) -> Duration {
        Duration::from_secs(self.contact_timeout_secs)
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> String;
}

// Form relay URLs embed the form id; only the origin is safe to log.
impl Redact for Option<String> {
    fn redact(&self) -> String {
        match self.as_deref() {
            None => "[NOT CONFIGURED]".to_string(),
            Some(raw) => match Url::parse(raw) {
                Ok(url) => format!("{}/[REDACTED]", url.origin().ascii_serialization()),
                Err(_) => "[INVALID]".to_string(),
            },
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("contact_endpoint", &self.contact_endpoint.redact())
            .field("contact_encoding", &self.contact_encoding)
            .field("contact_form_name", &self.contact_form_name)
            .field("contact_timeout_secs", &self.contact_timeout_secs)
            .field("log_format", &self.log_format)
            .finish()
    }
}
