use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

use crate::error::BondError;
use crate::types::common::UserTier;

/// Default BondMCP API base URL
pub const BONDMCP_DEFAULT_BASE: &str = "https://api.bondmcp.com";
/// Default per-attempt request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default maximum number of retries after the original attempt
pub const DEFAULT_MAX_RETRIES: usize = 3;
/// Default base delay for exponential backoff
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);
/// Client identifier sent with every request
pub const CLIENT_USER_AGENT: &str = concat!("bondmcp-rust/", env!("CARGO_PKG_VERSION"));

/// Outbound request budget: `requests` permits per `window`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Number of permits granted per window
    pub requests: u32,
    /// Refill window
    pub window: Duration,
}

/// Configuration for the BondMCP client
///
/// Immutable once handed to a [`Client`](crate::Client); `with_*` overrides
/// are applied in call order, later calls winning for the same field.
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct BondConfig {
    api_base: String,
    api_key: Option<SecretString>,
    timeout: Duration,
    max_retries: usize,
    retry_delay: Duration,
    rate_limit: Option<RateLimit>,
    logging: bool,
    user_tier: UserTier,
}

impl Default for BondConfig {
    fn default() -> Self {
        let api_key = std::env::var("BONDMCP_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(SecretString::from);

        let api_base = std::env::var("BONDMCP_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| BONDMCP_DEFAULT_BASE.into());

        Self {
            api_base,
            api_key,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            rate_limit: None,
            logging: false,
            user_tier: UserTier::default(),
        }
    }
}

impl BondConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `BONDMCP_API_KEY` for the API key
    /// - `BONDMCP_BASE_URL` for a custom base URL (defaults to `https://api.bondmcp.com`)
    ///
    /// The executor itself never reads the environment; it only happens here.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Sets the per-attempt request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum number of retries after the original attempt
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the base delay for exponential backoff
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Sets the outbound rate-limit budget
    ///
    /// Without one the client never throttles.
    #[must_use]
    pub const fn with_rate_limit(mut self, requests: u32, window: Duration) -> Self {
        self.rate_limit = Some(RateLimit { requests, window });
        self
    }

    /// Enables per-attempt request logging via `tracing`
    #[must_use]
    pub const fn with_logging(mut self, enable: bool) -> Self {
        self.logging = enable;
        self
    }

    /// Sets the subscription tier label reported in usage statistics
    #[must_use]
    pub const fn with_user_tier(mut self, tier: UserTier) -> Self {
        self.user_tier = tier;
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Configuration trait consumed by the client
///
/// Implement this to provide custom authentication or policy. The policy
/// accessors have defaults so most implementations only supply the four
/// request-shaping methods.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, BondError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Returns query parameters to include in every request
    fn query(&self) -> Vec<(&str, &str)>;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::Authentication`] if no credential is configured.
    fn validate_auth(&self) -> Result<(), BondError>;

    /// Per-attempt request timeout
    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }

    /// Maximum retries after the original attempt
    fn max_retries(&self) -> usize {
        DEFAULT_MAX_RETRIES
    }

    /// Base delay for exponential backoff
    fn retry_delay(&self) -> Duration {
        DEFAULT_RETRY_DELAY
    }

    /// Outbound rate-limit budget; `None` means unlimited throughput
    fn rate_limit(&self) -> Option<RateLimit> {
        None
    }

    /// Whether to emit per-attempt `tracing` lines
    fn logging(&self) -> bool {
        false
    }

    /// Subscription tier label reported in usage statistics
    fn user_tier(&self) -> UserTier {
        UserTier::default()
    }
}

impl Config for BondConfig {
    fn headers(&self) -> Result<HeaderMap, BondError> {
        let mut h = HeaderMap::new();

        h.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(secret) = &self.api_key {
            let key = secret.expose_secret().trim();
            if !key.is_empty() {
                let bearer = format!("Bearer {key}");
                h.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&bearer).map_err(|_| {
                        BondError::Authentication("API key contains invalid characters".into())
                    })?,
                );
            }
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn query(&self) -> Vec<(&str, &str)> {
        vec![]
    }

    fn validate_auth(&self) -> Result<(), BondError> {
        match &self.api_key {
            Some(secret) if !secret.expose_secret().trim().is_empty() => Ok(()),
            _ => Err(BondError::Authentication(
                "API key is required: pass one to Client::new or set BONDMCP_API_KEY".into(),
            )),
        }
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn max_retries(&self) -> usize {
        self.max_retries
    }

    fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit
    }

    fn logging(&self) -> bool {
        self.logging
    }

    fn user_tier(&self) -> UserTier {
        self.user_tier
    }
}
