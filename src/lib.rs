//! Spotify Web API Client Library
//!
//! This library provides a typed binding to the Spotify Web API. It converts
//! between the platform's three identifier encodings (raw base62 ID, URI,
//! URL), maps API resources into serde domain models, and dispatches HTTP
//! requests through a pluggable sender layer that supports blocking and
//! asynchronous execution with three connection-reuse strategies.
//!
//! # Modules
//!
//! - `client` - High-level API clients wiring endpoints to a sender
//! - `config` - API base URL configuration
//! - `convert` - Identifier validation and ID/URI/URL conversions
//! - `sender` - Request dispatch with pluggable connection-lifetime policies
//! - `types` - Data structures for API payloads
//!
//! # Example
//!
//! ```
//! use sporlib::{convert, Client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sporlib::ClientError> {
//!     let (kind, id) = convert::from_url("https://open.spotify.com/album/3RBULTZJ97bvVzZLpxcB0j")?;
//!     println!("looking up {kind} {id}");
//!
//!     let client = Client::new("BQC...");
//!     let album = client.album(&id).await?;
//!     println!("{}", album.name);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod convert;
pub mod sender;
pub mod types;

pub use client::{BlockingClient, Client, ClientError};
pub use convert::{ConversionError, IdentifierType};
pub use sender::{AsyncSender, Lifetime, Request, Sender, TransportOptions};
