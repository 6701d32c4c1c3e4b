//! Configuration for the Spotify Web API base URL.
//!
//! The library talks to the public API by default; the `SPOTIFY_API_URL`
//! environment variable overrides it, which is mainly useful for pointing the
//! client at a mock server in tests.

use std::env;

/// The public Spotify Web API base URL.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable and falls back to
/// [`DEFAULT_API_URL`] when it is not set.
///
/// # Example
///
/// ```
/// let api_url = sporlib::config::spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
