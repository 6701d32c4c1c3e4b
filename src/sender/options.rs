use std::time::Duration;

use reqwest::Proxy;

/// Transport configuration forwarded verbatim to the underlying `reqwest`
/// client.
///
/// Options are recorded at sender construction but applied only when a
/// connection resource is actually built, so an invalid value (for example a
/// malformed proxy URL) surfaces as a `reqwest::Error` at first resource use
/// rather than when the sender is created. The request timeout is additionally
/// applied to every prepared request.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use sporlib::sender::TransportOptions;
///
/// let options = TransportOptions::new()
///     .user_agent("sporlib")
///     .timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    proxy: Option<String>,
}

impl TransportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the total request timeout, applied to the client and to each
    /// prepared request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection establishment timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Routes all requests through the given proxy URL.
    ///
    /// The URL is not validated here; a malformed value fails when the client
    /// is built.
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    pub(crate) fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds a blocking client with these options applied.
    pub(crate) fn build_blocking(&self) -> Result<reqwest::blocking::Client, reqwest::Error> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(url) = &self.proxy {
            builder = builder.proxy(Proxy::all(url)?);
        }
        builder.build()
    }

    /// Builds an asynchronous client with these options applied.
    pub(crate) fn build_async(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(url) = &self.proxy {
            builder = builder.proxy(Proxy::all(url)?);
        }
        builder.build()
    }
}
