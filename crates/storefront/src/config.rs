//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CHARKHA_BASE_URL` - Public URL for the storefront
//! - `RAZORPAY_KEY_ID` - Razorpay API key ID
//! - `RAZORPAY_KEY_SECRET` - Razorpay API key secret (high entropy)
//! - `UPI_PAYEE_VPA` - UPI virtual payment address for the store
//!
//! ## Optional
//! - `CHARKHA_HOST` - Bind address (default: 127.0.0.1)
//! - `CHARKHA_PORT` - Listen port (default: 3000)
//! - `UPI_PAYEE_NAME` - Payee display name (default: Charkha Bazaar)
//! - `RAZORPAY_API_BASE` - Gateway base URL (default: https://api.razorpay.com)
//! - `CLAUDE_API_KEY` - Anthropic API key; chat/recommendations fall back to
//!   static responses when unset
//! - `CLAUDE_MODEL` - Model name (default: claude-sonnet-4-20250514)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Razorpay payment gateway configuration
    pub razorpay: RazorpayConfig,
    /// UPI deep-link configuration
    pub upi: UpiConfig,
    /// Claude API configuration; `None` disables the assistant
    pub claude: Option<ClaudeConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Razorpay payment gateway configuration.
///
/// Implements `Debug` manually to redact the key secret.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// API key ID (sent to the browser for the hosted payment UI)
    pub key_id: String,
    /// API key secret (server-side only)
    pub key_secret: SecretString,
    /// Gateway base URL; overridable for testing
    pub api_base: String,
}

impl std::fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// UPI deep-link configuration.
#[derive(Debug, Clone)]
pub struct UpiConfig {
    /// Virtual payment address the payment is directed to
    pub payee_vpa: String,
    /// Display name shown in the payer's UPI app
    pub payee_name: String,
}

/// Claude API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ClaudeConfig {
    /// Anthropic API key
    pub api_key: SecretString,
    /// Model name
    pub model: String,
}

impl std::fmt::Debug for ClaudeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaudeConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("CHARKHA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CHARKHA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CHARKHA_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CHARKHA_PORT".to_string(), e.to_string()))?;
        let base_url = get_required_env("CHARKHA_BASE_URL")?;

        let razorpay = RazorpayConfig::from_env()?;
        let upi = UpiConfig::from_env()?;
        let claude = ClaudeConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            razorpay,
            upi,
            claude,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl RazorpayConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            key_id: get_required_env("RAZORPAY_KEY_ID")?,
            key_secret: get_validated_secret("RAZORPAY_KEY_SECRET")?,
            api_base: get_env_or_default("RAZORPAY_API_BASE", "https://api.razorpay.com"),
        })
    }
}

impl UpiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            payee_vpa: get_required_env("UPI_PAYEE_VPA")?,
            payee_name: get_env_or_default("UPI_PAYEE_NAME", "Charkha Bazaar"),
        })
    }
}

impl ClaudeConfig {
    /// The assistant is optional: without an API key the chat and
    /// recommendation endpoints serve their static fallbacks.
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(api_key) = get_optional_env("CLAUDE_API_KEY") else {
            return Ok(None);
        };
        validate_secret_strength(&api_key, "CLAUDE_API_KEY")?;

        Ok(Some(Self {
            api_key: SecretString::from(api_key),
            model: get_env_or_default("CLAUDE_MODEL", "claude-sonnet-4-20250514"),
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real API keys have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a real API key."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}
