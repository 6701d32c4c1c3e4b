//! High-level clients for the Spotify Web API.
//!
//! A client holds a bearer access token, the API base URL and a boxed sender;
//! each endpoint method validates its IDs, builds a logical request, dispatches
//! it through the sender and deserializes the JSON payload into the typed
//! models from [`crate::types`]. Token acquisition is the caller's concern:
//! any OAuth flow that yields a bearer token works.
//!
//! # Example
//!
//! ```
//! use sporlib::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sporlib::ClientError> {
//!     let client = Client::new("BQC...");
//!     let album = client.album("3RBULTZJ97bvVzZLpxcB0j").await?;
//!     println!("{} ({})", album.name, album.release_date);
//!     Ok(())
//! }
//! ```

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    config,
    convert::{check_id, from_uri, ConversionError},
    sender::{AsyncPersistentSender, AsyncSender, PersistentSender, Request, Sender},
    types::{AddTracksRequest, Album, Artist, Playlist, PlaylistSnapshot, SeveralAlbums, Track},
};

/// Errors surfaced by the client layer.
///
/// Identifier validation fails before any network activity; HTTP errors are
/// the transport's own, propagated unmodified.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Asynchronous Spotify Web API client.
pub struct Client {
    api_url: String,
    token: String,
    sender: Box<dyn AsyncSender>,
}

impl Client {
    /// Creates a client with a persistent-policy sender and the configured
    /// API base URL.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_sender(token, Box::new(AsyncPersistentSender::default()))
    }

    /// Creates a client dispatching through the given sender.
    pub fn with_sender(token: impl Into<String>, sender: Box<dyn AsyncSender>) -> Self {
        Self {
            api_url: config::spotify_apiurl(),
            token: token.into(),
            sender,
        }
    }

    /// Overrides the API base URL, e.g. for a mock server.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = Request::get(format!("{}{}", self.api_url, path)).bearer_auth(&self.token);
        let response = self.sender.send(request).await?;
        Ok(response.error_for_status()?.json().await?)
    }

    /// Fetches an artist by base62 ID.
    pub async fn artist(&self, id: &str) -> Result<Artist, ClientError> {
        check_id(id)?;
        self.get_json(&format!("/artists/{id}")).await
    }

    /// Fetches an album by base62 ID.
    pub async fn album(&self, id: &str) -> Result<Album, ClientError> {
        check_id(id)?;
        self.get_json(&format!("/albums/{id}")).await
    }

    /// Fetches several albums in one request. Every ID is validated before
    /// any network activity.
    pub async fn albums(&self, ids: &[&str]) -> Result<Vec<Album>, ClientError> {
        for id in ids {
            check_id(id)?;
        }
        let several: SeveralAlbums = self.get_json(&format!("/albums?ids={}", ids.join(","))).await?;
        Ok(several.albums)
    }

    /// Fetches a track by base62 ID.
    pub async fn track(&self, id: &str) -> Result<Track, ClientError> {
        check_id(id)?;
        self.get_json(&format!("/tracks/{id}")).await
    }

    /// Fetches a playlist by base62 ID.
    pub async fn playlist(&self, id: &str) -> Result<Playlist, ClientError> {
        check_id(id)?;
        self.get_json(&format!("/playlists/{id}")).await
    }

    /// Appends tracks to a playlist and returns the new snapshot ID. The
    /// playlist ID and every track URI are validated before any network
    /// activity.
    pub async fn playlist_add_tracks(
        &self,
        playlist_id: &str,
        uris: &[&str],
    ) -> Result<String, ClientError> {
        check_id(playlist_id)?;
        for uri in uris {
            from_uri(uri)?;
        }
        let body = AddTracksRequest {
            uris: uris.iter().map(|uri| uri.to_string()).collect(),
        };
        let request = Request::post(format!("{}/playlists/{playlist_id}/tracks", self.api_url))
            .bearer_auth(&self.token)
            .json(&body)?;
        let response = self.sender.send(request).await?;
        let snapshot: PlaylistSnapshot = response.error_for_status()?.json().await?;
        Ok(snapshot.snapshot_id)
    }
}

/// Blocking Spotify Web API client, mirroring [`Client`] for callers without
/// an async runtime.
pub struct BlockingClient {
    api_url: String,
    token: String,
    sender: Box<dyn Sender>,
}

impl BlockingClient {
    /// Creates a client with a persistent-policy sender and the configured
    /// API base URL.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_sender(token, Box::new(PersistentSender::default()))
    }

    /// Creates a client dispatching through the given sender.
    pub fn with_sender(token: impl Into<String>, sender: Box<dyn Sender>) -> Self {
        Self {
            api_url: config::spotify_apiurl(),
            token: token.into(),
            sender,
        }
    }

    /// Overrides the API base URL, e.g. for a mock server.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = Request::get(format!("{}{}", self.api_url, path)).bearer_auth(&self.token);
        let response = self.sender.send(request)?;
        Ok(response.error_for_status()?.json()?)
    }

    /// Fetches an artist by base62 ID.
    pub fn artist(&self, id: &str) -> Result<Artist, ClientError> {
        check_id(id)?;
        self.get_json(&format!("/artists/{id}"))
    }

    /// Fetches an album by base62 ID.
    pub fn album(&self, id: &str) -> Result<Album, ClientError> {
        check_id(id)?;
        self.get_json(&format!("/albums/{id}"))
    }

    /// Fetches several albums in one request. Every ID is validated before
    /// any network activity.
    pub fn albums(&self, ids: &[&str]) -> Result<Vec<Album>, ClientError> {
        for id in ids {
            check_id(id)?;
        }
        let several: SeveralAlbums = self.get_json(&format!("/albums?ids={}", ids.join(",")))?;
        Ok(several.albums)
    }

    /// Fetches a track by base62 ID.
    pub fn track(&self, id: &str) -> Result<Track, ClientError> {
        check_id(id)?;
        self.get_json(&format!("/tracks/{id}"))
    }

    /// Fetches a playlist by base62 ID.
    pub fn playlist(&self, id: &str) -> Result<Playlist, ClientError> {
        check_id(id)?;
        self.get_json(&format!("/playlists/{id}"))
    }

    /// Appends tracks to a playlist and returns the new snapshot ID. The
    /// playlist ID and every track URI are validated before any network
    /// activity.
    pub fn playlist_add_tracks(
        &self,
        playlist_id: &str,
        uris: &[&str],
    ) -> Result<String, ClientError> {
        check_id(playlist_id)?;
        for uri in uris {
            from_uri(uri)?;
        }
        let body = AddTracksRequest {
            uris: uris.iter().map(|uri| uri.to_string()).collect(),
        };
        let request = Request::post(format!("{}/playlists/{playlist_id}/tracks", self.api_url))
            .bearer_auth(&self.token)
            .json(&body)?;
        let response = self.sender.send(request)?;
        let snapshot: PlaylistSnapshot = response.error_for_status()?.json()?;
        Ok(snapshot.snapshot_id)
    }
}
