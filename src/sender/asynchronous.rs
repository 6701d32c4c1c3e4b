use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use super::{AsyncSender, Request, TransportOptions};

/// Client shared by every [`AsyncSingletonSender`] in the process, separate
/// from the blocking senders' shared session.
static SHARED_CLIENT: Mutex<Option<Arc<Client>>> = Mutex::new(None);

async fn dispatch(
    client: &Client,
    request: Request,
    options: &TransportOptions,
) -> Result<Response, reqwest::Error> {
    let prepared = request.prepare_async(client, options)?;
    debug!(method = %prepared.method(), url = %prepared.url(), "dispatching async request");
    client.execute(prepared).await
}

/// Asynchronous sender that builds a fresh client for every `send` and
/// discards it afterward. Invalid transport options fail on the first `send`.
#[derive(Debug, Default)]
pub struct AsyncTransientSender {
    options: TransportOptions,
}

impl AsyncTransientSender {
    pub fn new(options: TransportOptions) -> Self {
        Self { options }
    }

    /// A client built from this sender's options. Every access builds a new
    /// one; nothing is retained between calls.
    ///
    /// # Errors
    ///
    /// Fails with the transport's parameter error when the recorded options
    /// cannot produce a client.
    pub fn client(&self) -> Result<Arc<Client>, reqwest::Error> {
        Ok(Arc::new(self.options.build_async()?))
    }
}

#[async_trait]
impl AsyncSender for AsyncTransientSender {
    async fn send(&self, request: Request) -> Result<Response, reqwest::Error> {
        let client = self.client()?;
        dispatch(&client, request, &self.options).await
    }
}

/// Asynchronous sender that lazily builds one client on first use and reuses
/// it for the lifetime of the instance. Instances never share clients.
#[derive(Debug, Default)]
pub struct AsyncPersistentSender {
    options: TransportOptions,
    client: Mutex<Option<Arc<Client>>>,
}

impl AsyncPersistentSender {
    pub fn new(options: TransportOptions) -> Self {
        Self {
            options,
            client: Mutex::new(None),
        }
    }

    /// The client held by this instance, built on first access. The guard
    /// makes concurrent first use create at most one client; building a
    /// `reqwest::Client` involves no I/O, so the lock is never held across an
    /// await point.
    ///
    /// # Errors
    ///
    /// Fails with the transport's parameter error when the recorded options
    /// cannot produce a client.
    pub fn client(&self) -> Result<Arc<Client>, reqwest::Error> {
        let mut slot = self.client.lock().expect("client lock poisoned");
        if let Some(client) = slot.as_ref() {
            return Ok(Arc::clone(client));
        }
        let client = Arc::new(self.options.build_async()?);
        *slot = Some(Arc::clone(&client));
        Ok(client)
    }
}

#[async_trait]
impl AsyncSender for AsyncPersistentSender {
    async fn send(&self, request: Request) -> Result<Response, reqwest::Error> {
        let client = self.client()?;
        dispatch(&client, request, &self.options).await
    }
}

/// Asynchronous sender whose client is shared by all [`AsyncSingletonSender`]
/// instances in the process. The first use builds the client; every later
/// instance observes and reuses the same one.
#[derive(Debug, Default)]
pub struct AsyncSingletonSender {
    options: TransportOptions,
}

impl AsyncSingletonSender {
    pub fn new(options: TransportOptions) -> Self {
        Self { options }
    }

    /// The process-wide shared client, built on first access by whichever
    /// instance gets there first.
    ///
    /// # Errors
    ///
    /// Fails with the transport's parameter error when the client has not
    /// been built yet and this instance's options cannot produce one.
    pub fn client(&self) -> Result<Arc<Client>, reqwest::Error> {
        let mut slot = SHARED_CLIENT.lock().expect("shared client lock poisoned");
        if let Some(client) = slot.as_ref() {
            return Ok(Arc::clone(client));
        }
        let client = Arc::new(self.options.build_async()?);
        *slot = Some(Arc::clone(&client));
        Ok(client)
    }
}

#[async_trait]
impl AsyncSender for AsyncSingletonSender {
    async fn send(&self, request: Request) -> Result<Response, reqwest::Error> {
        let client = self.client()?;
        dispatch(&client, request, &self.options).await
    }
}
