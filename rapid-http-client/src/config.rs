//! Transport configuration.

use std::time::Duration;

/// Settings for the reqwest-backed transport.
///
/// Requests always carry absolute URLs and their own headers, so there is no
/// base URL or default header set here.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Whole-request timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// How long idle pooled connections are kept.
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    /// Fallback user agent. A `User-Agent` header on the request wins.
    pub user_agent: String,
    /// Accept gzip and brotli encoded responses.
    pub compression: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(100),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 8,
            user_agent: format!("rapid-http-client/{}", env!("CARGO_PKG_VERSION")),
            compression: true,
        }
    }
}

impl HttpClientConfig {
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }

    pub(crate) fn client_builder(&self) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .pool_idle_timeout(self.pool_idle_timeout)
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .user_agent(&self.user_agent)
            .gzip(self.compression)
            .brotli(self.compression)
            .redirect(reqwest::redirect::Policy::none())
    }
}

/// Builder for [`HttpClientConfig`].
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn compression(mut self, enable: bool) -> Self {
        self.config.compression = enable;
        self
    }

    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}
