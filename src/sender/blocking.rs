use std::sync::{Arc, Mutex};

use reqwest::blocking::{Client, Response};
use tracing::debug;

use super::{Request, Sender, TransportOptions};

/// Session shared by every [`SingletonSender`] in the process. Initialized at
/// most once, on first use, and never torn down.
static SHARED_SESSION: Mutex<Option<Arc<Client>>> = Mutex::new(None);

fn dispatch(
    session: &Client,
    request: Request,
    options: &TransportOptions,
) -> Result<Response, reqwest::Error> {
    let prepared = request.prepare_blocking(session, options)?;
    debug!(method = %prepared.method(), url = %prepared.url(), "dispatching blocking request");
    session.execute(prepared)
}

/// Blocking sender that builds a fresh session for every `send` and discards
/// it afterward. No reuse across calls; invalid transport options therefore
/// fail on the first `send`.
#[derive(Debug, Default)]
pub struct TransientSender {
    options: TransportOptions,
}

impl TransientSender {
    pub fn new(options: TransportOptions) -> Self {
        Self { options }
    }

    /// A session built from this sender's options. Every access builds a new
    /// one; nothing is retained between calls.
    ///
    /// # Errors
    ///
    /// Fails with the transport's parameter error when the recorded options
    /// cannot produce a client.
    pub fn session(&self) -> Result<Arc<Client>, reqwest::Error> {
        Ok(Arc::new(self.options.build_blocking()?))
    }
}

impl Sender for TransientSender {
    fn send(&self, request: Request) -> Result<Response, reqwest::Error> {
        let session = self.session()?;
        dispatch(&session, request, &self.options)
    }
}

/// Blocking sender that lazily builds one session on first use and reuses it
/// for the lifetime of the instance. Instances never share sessions.
#[derive(Debug, Default)]
pub struct PersistentSender {
    options: TransportOptions,
    session: Mutex<Option<Arc<Client>>>,
}

impl PersistentSender {
    pub fn new(options: TransportOptions) -> Self {
        Self {
            options,
            session: Mutex::new(None),
        }
    }

    /// The session held by this instance, built on first access. The guard
    /// makes concurrent first use create at most one session.
    ///
    /// # Errors
    ///
    /// Fails with the transport's parameter error when the recorded options
    /// cannot produce a client.
    pub fn session(&self) -> Result<Arc<Client>, reqwest::Error> {
        let mut slot = self.session.lock().expect("session lock poisoned");
        if let Some(session) = slot.as_ref() {
            return Ok(Arc::clone(session));
        }
        let session = Arc::new(self.options.build_blocking()?);
        *slot = Some(Arc::clone(&session));
        Ok(session)
    }
}

impl Sender for PersistentSender {
    fn send(&self, request: Request) -> Result<Response, reqwest::Error> {
        let session = self.session()?;
        dispatch(&session, request, &self.options)
    }
}

/// Blocking sender whose session is shared by all [`SingletonSender`]
/// instances in the process. The first use builds the session; every later
/// instance observes and reuses the same one.
#[derive(Debug, Default)]
pub struct SingletonSender {
    options: TransportOptions,
}

impl SingletonSender {
    pub fn new(options: TransportOptions) -> Self {
        Self { options }
    }

    /// The process-wide shared session, built on first access by whichever
    /// instance gets there first.
    ///
    /// # Errors
    ///
    /// Fails with the transport's parameter error when the session has not
    /// been built yet and this instance's options cannot produce a client.
    pub fn session(&self) -> Result<Arc<Client>, reqwest::Error> {
        let mut slot = SHARED_SESSION.lock().expect("shared session lock poisoned");
        if let Some(session) = slot.as_ref() {
            return Ok(Arc::clone(session));
        }
        let session = Arc::new(self.options.build_blocking()?);
        *slot = Some(Arc::clone(&session));
        Ok(session)
    }
}

impl Sender for SingletonSender {
    fn send(&self, request: Request) -> Result<Response, reqwest::Error> {
        let session = self.session()?;
        dispatch(&session, request, &self.options)
    }
}
