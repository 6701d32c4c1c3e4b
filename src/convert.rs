//! Conversions between Spotify IDs, URIs and URLs.
//!
//! Every Spotify resource can be addressed in three ways: a raw base62 ID
//! (`3RBULTZJ97bvVzZLpxcB0j`), a URI (`spotify:album:3RBULTZJ97bvVzZLpxcB0j`)
//! and an open.spotify.com URL. This module validates identifiers and converts
//! between the three encodings without ever producing a partially built
//! result: the type is checked first, then the ID, and the output string is
//! only assembled once both checks pass.
//!
//! # Example
//!
//! ```
//! use sporlib::convert::{from_url, to_url};
//!
//! let url = to_url("album", "3RBULTZJ97bvVzZLpxcB0j")?;
//! assert_eq!(url, "https://open.spotify.com/album/3RBULTZJ97bvVzZLpxcB0j");
//!
//! let (kind, id) = from_url(&url)?;
//! println!("Got type `{kind}` with ID `{id}`");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised for any malformed identifier, type, URI or URL.
///
/// Always a client-side input error: conversions fail before any network
/// activity and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The type tag is not a member of [`IdentifierType`].
    #[error("invalid type \"{0}\"")]
    InvalidType(String),
    /// The ID is empty or contains a character outside `[0-9a-zA-Z]`.
    #[error("invalid id \"{0}\"")]
    InvalidId(String),
    /// The URI does not split into exactly `spotify:<type>:<id>`.
    #[error("malformed URI \"{0}\", expected spotify:<type>:<id>")]
    MalformedUri(String),
    /// The URI scheme is not literally `spotify`.
    #[error("invalid URI prefix \"{0}\"")]
    InvalidUriPrefix(String),
    /// The URL has too few segments to contain a type and an ID.
    #[error("malformed URL \"{0}\", expected https://open.spotify.com/<type>/<id>")]
    MalformedUrl(String),
    /// The URL does not start with an accepted open.spotify.com prefix.
    #[error("invalid URL prefix \"{0}\"")]
    InvalidUrlPrefix(String),
}

/// Valid types of Spotify IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    Artist,
    Album,
    Episode,
    Playlist,
    Show,
    Track,
}

impl IdentifierType {
    /// All valid identifier types.
    pub const ALL: [IdentifierType; 6] = [
        IdentifierType::Artist,
        IdentifierType::Album,
        IdentifierType::Episode,
        IdentifierType::Playlist,
        IdentifierType::Show,
        IdentifierType::Track,
    ];

    /// The canonical lowercase tag used in URIs and URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            IdentifierType::Artist => "artist",
            IdentifierType::Album => "album",
            IdentifierType::Episode => "episode",
            IdentifierType::Playlist => "playlist",
            IdentifierType::Show => "show",
            IdentifierType::Track => "track",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artist" => Ok(IdentifierType::Artist),
            "album" => Ok(IdentifierType::Album),
            "episode" => Ok(IdentifierType::Episode),
            "playlist" => Ok(IdentifierType::Playlist),
            "show" => Ok(IdentifierType::Show),
            "track" => Ok(IdentifierType::Track),
            _ => Err(ConversionError::InvalidType(s.to_string())),
        }
    }
}

/// URL prefixes accepted when parsing. The bare-domain and `http://` forms are
/// backward compatibility for malformed input; [`to_url`] always emits
/// `https://`.
const URL_PREFIXES: [&str; 3] = [
    "open.spotify.com",
    "http://open.spotify.com",
    "https://open.spotify.com",
];

/// Validates the type tag of an ID.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidType`] when `type_` is not one of the
/// canonical tags of [`IdentifierType`].
pub fn check_type(type_: &str) -> Result<IdentifierType, ConversionError> {
    type_.parse()
}

/// Validates a resource ID against the base62 grammar.
///
/// The empty string is rejected explicitly; every character must be an ASCII
/// digit or Latin letter.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidId`] for an empty or non-base62 ID.
pub fn check_id(id: &str) -> Result<(), ConversionError> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConversionError::InvalidId(id.to_string()));
    }
    Ok(())
}

/// Converts an ID to a URI of the appropriate type.
///
/// Validates the type, then the ID, and only then assembles
/// `spotify:<type>:<id>`.
///
/// # Example
///
/// ```
/// let uri = sporlib::convert::to_uri("album", "3RBULTZJ97bvVzZLpxcB0j")?;
/// assert_eq!(uri, "spotify:album:3RBULTZJ97bvVzZLpxcB0j");
/// ```
pub fn to_uri(type_: &str, id: &str) -> Result<String, ConversionError> {
    let kind = check_type(type_)?;
    check_id(id)?;
    Ok(format!("spotify:{kind}:{id}"))
}

/// Converts an ID to an open.spotify.com URL of the appropriate type.
///
/// Validates the type, then the ID, and only then assembles
/// `https://open.spotify.com/<type>/<id>`. Generation always uses the
/// `https://` prefix even though [`from_url`] accepts more.
pub fn to_url(type_: &str, id: &str) -> Result<String, ConversionError> {
    let kind = check_type(type_)?;
    check_id(id)?;
    Ok(format!("https://open.spotify.com/{kind}/{id}"))
}

/// Parses type and ID from a `spotify:<type>:<id>` URI.
///
/// # Errors
///
/// - [`ConversionError::MalformedUri`] when splitting on `:` does not yield
///   exactly three parts
/// - [`ConversionError::InvalidUriPrefix`] when the scheme is not `spotify`
/// - [`ConversionError::InvalidType`] / [`ConversionError::InvalidId`] when
///   the parsed fields fail validation
pub fn from_uri(uri: &str) -> Result<(IdentifierType, String), ConversionError> {
    let mut parts = uri.split(':');
    let (Some(prefix), Some(type_), Some(id), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ConversionError::MalformedUri(uri.to_string()));
    };

    if prefix != "spotify" {
        return Err(ConversionError::InvalidUriPrefix(prefix.to_string()));
    }
    let kind = check_type(type_)?;
    check_id(id)?;

    Ok((kind, id.to_string()))
}

/// Parses type and ID from an open.spotify.com URL.
///
/// The last two `/`-separated segments are taken as type and ID; everything
/// before them, rejoined with `/`, must exactly equal one of the accepted
/// prefixes (`open.spotify.com`, optionally preceded by `http://` or
/// `https://`).
///
/// # Errors
///
/// - [`ConversionError::MalformedUrl`] when the URL has fewer than two
///   segments
/// - [`ConversionError::InvalidUrlPrefix`] when the leading segments are not
///   an accepted prefix
/// - [`ConversionError::InvalidType`] / [`ConversionError::InvalidId`] when
///   the parsed fields fail validation
pub fn from_url(url: &str) -> Result<(IdentifierType, String), ConversionError> {
    let segments: Vec<&str> = url.split('/').collect();
    let [leading @ .., type_, id] = segments.as_slice() else {
        return Err(ConversionError::MalformedUrl(url.to_string()));
    };
    let prefix = leading.join("/");

    if !URL_PREFIXES.contains(&prefix.as_str()) {
        return Err(ConversionError::InvalidUrlPrefix(prefix));
    }
    let kind = check_type(type_)?;
    check_id(id)?;

    Ok((kind, (*id).to_string()))
}
