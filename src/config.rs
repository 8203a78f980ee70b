use crate::error::{EversignError, Result};
use reqwest::blocking::{Client, ClientBuilder};
use std::env;
use std::time::Duration;
use url::Url;

/// Production API root
pub const DEFAULT_API_URL: &str = "https://api.eversign.com/api/";

/// Create the HTTP client for API requests.
///
/// No request timeout is set unless the configuration asks for one; reqwest's
/// blocking client would otherwise apply its own 30 second default.
pub fn create_http_client(config: &Config) -> Result<Client> {
    ClientBuilder::new()
        .pool_max_idle_per_host(50)
        .timeout(config.timeout)
        .connect_timeout(Duration::from_secs(10))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(EversignError::from)
}

/// Configuration for the eversign client
#[derive(Debug, Clone)]
pub struct Config {
    /// API root, endpoints are joined onto it
    pub api_url: String,
    /// Log every request at info level instead of debug
    pub debug: bool,
    /// Whole-request timeout, none by default
    pub timeout: Option<Duration>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            debug: false,
            timeout: None,
            user_agent: concat!("eversign-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration pointing at the given API root
    pub fn new(api_url: impl Into<String>) -> Self {
        Config {
            api_url: api_url.into(),
            ..Config::default()
        }
    }

    /// Build a configuration from `EVERSIGN_API_URL`, `EVERSIGN_DEBUG` and
    /// `EVERSIGN_TIMEOUT_SECS`, falling back to defaults for unset variables.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(url) = env::var("EVERSIGN_API_URL") {
            if !url.trim().is_empty() {
                config.api_url = url.trim().to_string();
            }
        }

        if let Ok(debug) = env::var("EVERSIGN_DEBUG") {
            config.debug = matches!(debug.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        if let Ok(secs) = env::var("EVERSIGN_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(_) => tracing::warn!(value = %secs, "ignoring invalid EVERSIGN_TIMEOUT_SECS"),
            }
        }

        config
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set a whole-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Resolve an endpoint path such as `document` against the API root
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let base = if self.api_url.ends_with('/') {
            Url::parse(&self.api_url)?
        } else {
            Url::parse(&format!("{}/", self.api_url))?
        };
        Ok(base.join(endpoint.trim_start_matches('/'))?)
    }
}
