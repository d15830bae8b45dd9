use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::str::FromStr;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub xendit: ProviderConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Which Xendit integration style the provider drives.
///
/// Both styles share the status mapper and webhook dispatcher; they differ
/// only in the gateway client's endpoint selection and request-body shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentStyle {
    /// Direct payment requests (`/v3/payment_requests`)
    Direct,
    /// Hosted payment links / invoices (`/v2/invoices`)
    Link,
}

impl FromStr for IntentStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" | "payment_request" => Ok(IntentStyle::Direct),
            "link" | "invoice" => Ok(IntentStyle::Link),
            _ => Err(format!("Unknown intent style: {}", s)),
        }
    }
}

impl fmt::Display for IntentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentStyle::Direct => write!(f, "direct"),
            IntentStyle::Link => write!(f, "link"),
        }
    }
}

/// Whether funds are captured automatically on success or via a separate step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaptureMethod {
    Automatic,
    Manual,
}

impl CaptureMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureMethod::Automatic => "AUTOMATIC",
            CaptureMethod::Manual => "MANUAL",
        }
    }
}

impl FromStr for CaptureMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AUTOMATIC" => Ok(CaptureMethod::Automatic),
            "MANUAL" => Ok(CaptureMethod::Manual),
            _ => Err(format!("Unknown capture method: {}", s)),
        }
    }
}

/// Xendit provider configuration, supplied once at startup
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Secret API key used for Basic auth on every gateway call
    pub api_key: String,
    /// Shared secret for webhook verification (`x-callback-token`).
    /// Optional, but strongly recommended: without it every webhook is
    /// accepted and a security warning is logged per delivery.
    pub webhook_token: Option<String>,
    /// Gateway base URL override
    pub api_url: String,
    /// ISO country code attached to direct-style payment requests
    pub default_country: String,
    pub default_capture_method: CaptureMethod,
    pub intent_style: IntentStyle,
    /// Enables the admin simulate endpoint
    pub test_mode: bool,
}

pub const DEFAULT_API_URL: &str = "https://api.xendit.co";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            xendit: ProviderConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.xendit.validate()
    }
}

impl ProviderConfig {
    /// Load the provider configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(ProviderConfig {
            api_key: env::var("XENDIT_API_KEY")
                .map_err(|_| AppError::Configuration("XENDIT_API_KEY not set".to_string()))?,
            webhook_token: env::var("XENDIT_WEBHOOK_TOKEN").ok(),
            api_url: env::var("XENDIT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            default_country: env::var("XENDIT_COUNTRY").unwrap_or_else(|_| "ID".to_string()),
            default_capture_method: env::var("XENDIT_CAPTURE_METHOD")
                .unwrap_or_else(|_| "AUTOMATIC".to_string())
                .parse()
                .map_err(AppError::Configuration)?,
            intent_style: env::var("XENDIT_INTENT_STYLE")
                .unwrap_or_else(|_| "link".to_string())
                .parse()
                .map_err(AppError::Configuration)?,
            test_mode: env::var("XENDIT_TEST_MODE")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration(
                "Xendit API key must not be empty".to_string(),
            ));
        }

        if !self.api_url.starts_with("http") {
            return Err(AppError::Configuration(format!(
                "Invalid Xendit API URL: {}",
                self.api_url
            )));
        }

        if self.intent_style == IntentStyle::Direct && self.default_country.is_empty() {
            return Err(AppError::Configuration(
                "A default country is required for the direct payment-request style".to_string(),
            ));
        }

        Ok(())
    }
}
