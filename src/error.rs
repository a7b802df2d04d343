//! Error types shared by the library modules.

use thiserror::Error;

/// Startup configuration could not be resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value was absent or blank in every source.
    #[error("missing required configuration value: {0}")]
    Missing(&'static str),
    /// An optional numeric value could not be parsed.
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
    /// The config file exists but is not valid JSON.
    #[error("failed to parse config file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// A page or image could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("GIPHY API error: {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("unknown demo resource: {0}")]
    UnknownResource(String),
    /// The worker running the request died before answering.
    #[error("request aborted: {0}")]
    Aborted(String),
}

/// Image bytes could not be turned into frames.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("image decoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("image has no frames")]
    Empty,
}

/// The platform clipboard refused a write.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is unavailable")]
    Unavailable,
    /// There is no decoded image to put on the clipboard.
    #[error("image is not ready: {0}")]
    ImageNotReady(String),
    #[error("clipboard write denied: {0}")]
    Denied(String),
}
