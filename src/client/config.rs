//! Client configuration options.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use super::transport::Transport;

/// Environment variable holding the API access token.
pub const TOKEN_ENV_VAR: &str = "WILDBERRIES_TOKEN";

/// Environment variable enabling debug events (`1`, `true` or `yes`).
pub const DEBUG_ENV_VAR: &str = "WILDBERRIES_DEBUG";

/// Configuration for the Wildberries client.
///
/// Every field is optional; unset fields keep their defaults (an empty
/// token, a plain `reqwest` transport, no timeout, debug off).
///
/// # Example
///
/// ```
/// use wildberries_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_access_token("my-token")
///     .with_timeout(Duration::from_secs(60))
///     .with_debug(true);
/// ```
pub struct ClientConfig {
    /// Access token sent verbatim in the `Authorization` header
    pub access_token: SecretString,
    /// Custom transport; `None` builds a `reqwest::Client`
    pub transport: Option<Arc<dyn Transport>>,
    /// Emit debug events for empty bodies and decode fallbacks
    pub debug: bool,
    /// Timeout for the default transport only
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
    /// API hosts the fixed endpoint paths are joined to
    pub hosts: ApiHosts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_token: SecretString::from(String::new()),
            transport: None,
            debug: false,
            timeout: None,
            user_agent: format!("wildberries-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            hosts: ApiHosts::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the token and debug flag from the environment.
    ///
    /// A missing `WILDBERRIES_TOKEN` leaves the token empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            config.access_token = SecretString::from(token);
        }
        if let Ok(flag) = std::env::var(DEBUG_ENV_VAR) {
            config.debug = is_truthy(&flag);
        }
        config
    }

    /// Set the access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = SecretString::from(token.into());
        self
    }

    /// Replace the HTTP transport.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        let transport: Arc<dyn Transport> = Arc::new(transport);
        self.transport = Some(transport);
        self
    }

    /// Replace the HTTP transport with an already shared one.
    pub fn with_shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Enable or disable debug events.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the timeout used by the default transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Point the client at different hosts.
    pub fn with_hosts(mut self, hosts: ApiHosts) -> Self {
        self.hosts = hosts;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"[REDACTED]")
            .field("transport", &self.transport.as_ref().map_or("reqwest", |_| "custom"))
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("hosts", &self.hosts)
            .finish()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

/// Base URLs of the two Wildberries API hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHosts {
    /// Host serving supplier statistics reports
    pub statistics: String,
    /// Host serving common account endpoints
    pub common: String,
}

impl Default for ApiHosts {
    fn default() -> Self {
        Self {
            statistics: "https://statistics-api.wildberries.ru".to_string(),
            common: "https://common-api.wildberries.ru".to_string(),
        }
    }
}

impl ApiHosts {
    /// Use one base URL for both hosts, e.g. a local proxy.
    pub fn single(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            statistics: base.clone(),
            common: base,
        }
    }

    /// Absolute URL of a path on the statistics host.
    pub fn statistics_url(&self, path: &str) -> String {
        join(&self.statistics, path)
    }

    /// Absolute URL of a path on the common host.
    pub fn common_url(&self, path: &str) -> String {
        join(&self.common, path)
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.transport.is_none());
        assert!(!config.debug);
        assert_eq!(config.timeout, None);
        assert!(config.user_agent.starts_with("wildberries-rs/"));
        assert_eq!(config.hosts, ApiHosts::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new()
            .with_debug(true)
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("reports/2.0");

        assert!(config.debug);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent, "reports/2.0");
    }

    #[test]
    fn test_debug_output_hides_token() {
        let config = ClientConfig::new().with_access_token("super-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn test_host_urls() {
        let hosts = ApiHosts::default();
        assert_eq!(
            hosts.statistics_url("/api/v1/supplier/incomes"),
            "https://statistics-api.wildberries.ru/api/v1/supplier/incomes"
        );
        assert_eq!(
            hosts.common_url("/api/v1/seller-info"),
            "https://common-api.wildberries.ru/api/v1/seller-info"
        );
    }

    #[test]
    fn test_single_host_trailing_slash() {
        let hosts = ApiHosts::single("http://127.0.0.1:8080/");
        assert_eq!(hosts.statistics_url("/a"), "http://127.0.0.1:8080/a");
        assert_eq!(hosts.common_url("/b"), "http://127.0.0.1:8080/b");
    }

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" TRUE "));
        assert!(is_truthy("yes"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}
