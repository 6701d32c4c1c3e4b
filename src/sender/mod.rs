//! Request dispatch with pluggable connection-lifetime policies.
//!
//! A sender owns a `reqwest` connection resource (a blocking session or an
//! asynchronous client) and exposes a single `send` operation that prepares a
//! logical [`Request`] against that resource and returns the raw response.
//! Two axes combine into six concrete senders:
//!
//! - **Execution mode**: [`Sender`] blocks the calling thread until the
//!   response arrives; [`AsyncSender`] suspends at the network boundary.
//! - **Lifetime policy**: *transient* senders build a fresh resource for every
//!   call, *persistent* senders lazily build one resource per instance, and
//!   *singleton* senders share one process-wide resource across all instances
//!   of the type (one for each execution mode, alive until process exit).
//!
//! Senders are thin relays: transport errors — parameter errors from
//! [`TransportOptions`] as much as network failures — propagate unmodified as
//! `reqwest::Error`, with no retry or translation.
//!
//! # Example
//!
//! ```
//! use sporlib::sender::{blocking_sender, Lifetime, Request, TransportOptions};
//!
//! let sender = blocking_sender(Lifetime::Persistent, TransportOptions::new());
//! let response = sender.send(Request::get("https://api.spotify.com/v1/markets"))?;
//! ```

mod asynchronous;
mod blocking;
mod options;

pub use asynchronous::{AsyncPersistentSender, AsyncSingletonSender, AsyncTransientSender};
pub use blocking::{PersistentSender, SingletonSender, TransientSender};
pub use options::TransportOptions;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

/// A logical request description: everything needed to build a transport
/// request, independent of any connection resource.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Appends a header. Invalid names or values are not checked here; they
    /// fail during preparation as a `reqwest::Error`.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the `Authorization: Bearer <token>` header.
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `value` as the JSON body and sets the content type.
    pub fn json<T: Serialize>(self, value: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec(value)?;
        Ok(self
            .header("Content-Type", "application/json")
            .body(body))
    }

    /// Prepares the request against a blocking session. Called exactly once
    /// per send, after the connection resource is ready. URL and header parse
    /// failures surface here.
    pub(crate) fn prepare_blocking(
        self,
        session: &reqwest::blocking::Client,
        options: &TransportOptions,
    ) -> Result<reqwest::blocking::Request, reqwest::Error> {
        let mut builder = session.request(self.method, &self.url);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = options.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = self.body {
            builder = builder.body(body);
        }
        builder.build()
    }

    /// Prepares the request against an asynchronous client.
    pub(crate) fn prepare_async(
        self,
        client: &reqwest::Client,
        options: &TransportOptions,
    ) -> Result<reqwest::Request, reqwest::Error> {
        let mut builder = client.request(self.method, &self.url);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = options.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = self.body {
            builder = builder.body(body);
        }
        builder.build()
    }
}

/// Blocking request dispatch: `send` occupies the calling thread until the
/// transport completes.
pub trait Sender: Send + Sync {
    fn send(&self, request: Request) -> Result<reqwest::blocking::Response, reqwest::Error>;
}

/// Asynchronous request dispatch: `send` suspends at the network boundary.
///
/// Dropping the returned future cancels the in-flight network call and
/// releases its per-call resources; a persistent or singleton connection
/// resource outlives any cancelled call.
#[async_trait]
pub trait AsyncSender: Send + Sync {
    async fn send(&self, request: Request) -> Result<reqwest::Response, reqwest::Error>;
}

/// Connection-lifetime policy of a sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// A fresh connection resource per `send`, discarded afterward.
    Transient,
    /// One lazily created resource per sender instance.
    Persistent,
    /// One process-wide resource shared by all instances of the policy type.
    Singleton,
}

/// Builds a blocking sender with the given lifetime policy.
pub fn blocking_sender(lifetime: Lifetime, options: TransportOptions) -> Box<dyn Sender> {
    match lifetime {
        Lifetime::Transient => Box::new(TransientSender::new(options)),
        Lifetime::Persistent => Box::new(PersistentSender::new(options)),
        Lifetime::Singleton => Box::new(SingletonSender::new(options)),
    }
}

/// Builds an asynchronous sender with the given lifetime policy.
pub fn async_sender(lifetime: Lifetime, options: TransportOptions) -> Box<dyn AsyncSender> {
    match lifetime {
        Lifetime::Transient => Box::new(AsyncTransientSender::new(options)),
        Lifetime::Persistent => Box::new(AsyncPersistentSender::new(options)),
        Lifetime::Singleton => Box::new(AsyncSingletonSender::new(options)),
    }
}
