//! Error types for the gallery.
//!
//! This module defines the centralized error type [`GalleryError`] and a type alias
//! [`Result`] used throughout the crate. Fetch failures are the only errors the
//! navigation engine ever has to reason about, and they never reach it: the page
//! worker turns them into empty pages. Everything else surfaces at start-up
//! (configuration, fixtures, themes) and is propagated with `?`.

use thiserror::Error;

/// The main error type for gallery operations.
///
/// Most variants wrap errors from external crates using `#[from]` for automatic
/// conversion.
///
/// # Examples
///
/// ```
/// use gallerist::GalleryError;
///
/// fn validate_endpoint(endpoint: &str) -> Result<(), GalleryError> {
///     if endpoint.is_empty() {
///         return Err(GalleryError::Config("endpoint must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_endpoint("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The HTTP request for a page could not be sent or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The photos endpoint answered with a non-success status.
    #[error("photos endpoint returned {status} for page {page}")]
    Status {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Page number that was requested.
        page: u32,
    },

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON payload (fixture file or response body) was malformed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A fixture page is missing or cannot be served.
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A URL (endpoint or gallery location) could not be parsed.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

/// A specialized `Result` type for gallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;
