//! Gallerist: a paginated photo gallery with a cross-page preview carousel.
//!
//! Photos are served in fixed pages. The gallery shows one page as a grid,
//! opens any photo in a preview, and steps through photos with previous/next
//! controls that cross page boundaries on their own: stepping past the last
//! photo of a page loads the next page and selects its first photo, stepping
//! before the first loads the previous page and selects its last. The current
//! page is mirrored in the `page` query parameter of the gallery URL.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (main.rs)                                  │  ← Entry point
//! │  - stdin commands, fetch completions, rendering     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Navigation engine
//! │  - Event handling, page transitions                 │
//! │  - Stale response guard                             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Repository    │   │ Worker Layer  │
//! │ (ui/)         │   │ (repository/) │   │ (worker/)     │
//! │ - Rendering   │   │ - HTTP client │   │ - Fetch tasks │
//! │ - Theming     │   │ - Fixtures    │   │ - Failure →   │
//! │ - Components  │   │ - Remap       │   │   empty page  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Page URL sync, paths (infrastructure/)           │
//! │  - Photo, PageNumber, errors (domain/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)   Server (server/)  │
//! │  - OpenTelemetry spans to file    - /api/photos     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: gallery state and the event/action engine
//! - [`domain`]: photos, page numbers, errors
//! - [`infrastructure`]: URL page parameter, filesystem paths
//! - [`repository`]: where pages come from (HTTP endpoint or fixture files)
//! - [`worker`]: background page fetches
//! - [`ui`]: terminal rendering with themes
//! - [`server`]: the photos endpoint over fixture files
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! Both binaries take `key=value` arguments, optionally layered over a TOML
//! file given as `config=<path>`:
//!
//! ```text
//! gallerist start_url=http://localhost:3000/?page=2 theme=light trace_level=debug
//! gallerist-server fixtures_dir=./data bind=127.0.0.1:3000
//! ```
//!
//! # Example
//!
//! ```rust
//! use gallerist::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     start_url: "http://localhost:3000/?page=2".to_string(),
//!     ..Config::default()
//! };
//! let mut state = initialize(&config)?;
//! let (_, actions) = handle_event(&mut state, &Event::Initialize)?;
//! assert!(matches!(&actions[..], [Action::FetchPage(request)] if request.page.get() == 2));
//! # Ok::<(), gallerist::GalleryError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod repository;
pub mod server;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, Event, GalleryState, Transition};
pub use domain::{GalleryError, PageNumber, Photo, Result, User, MAX_PAGES};
pub use ui::Theme;

use infrastructure::{default_data_dir, expand_tilde};
use repository::{FixtureRepository, HttpPhotoRepository, PhotoRepository};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default photos endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/photos";

/// Default gallery location.
pub const DEFAULT_START_URL: &str = "http://localhost:3000/";

/// Default listen address of the photos server.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration shared by the gallery and the server.
///
/// # TOML
///
/// ```toml
/// endpoint = "http://localhost:3000/api/photos"
/// start_url = "http://localhost:3000/?page=1"
/// fixtures_dir = "~/gallery/data"
/// theme = "light"
/// trace_level = "debug"
/// request_timeout_secs = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Photos endpoint queried as `<endpoint>?page=N`.
    pub endpoint: String,

    /// Directory of `photos-N.fixtures.json` files.
    ///
    /// When set, the gallery reads pages from disk instead of `endpoint`. The
    /// server always serves from here.
    pub fixtures_dir: Option<PathBuf>,

    /// Gallery location the session starts at; its `page` parameter picks the
    /// first page shown.
    pub start_url: String,

    /// Where the span log is written.
    pub data_dir: PathBuf,

    /// Built-in theme name (`dark`, `light`). Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Custom TOML theme; see [`ui::theme`].
    pub theme_file: Option<PathBuf>,

    /// Filter directive for spans (`trace`, `debug`, `info`, ...).
    /// `RUST_LOG` takes precedence.
    pub trace_level: Option<String>,

    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Listen address of `gallerist-server`.
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fixtures_dir: None,
            start_url: DEFAULT_START_URL.to_string(),
            data_dir: default_data_dir(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Config {
    /// Builds a configuration from `key=value` pairs over the defaults.
    ///
    /// Unknown keys are ignored. A `request_timeout_secs` that does not parse
    /// keeps its default.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use gallerist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "light".to_string());
    /// map.insert("request_timeout_secs".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("light"));
    /// assert_eq!(config.request_timeout_secs, 10);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().merged(map)
    }

    /// Reads a TOML configuration file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GalleryError::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| GalleryError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Resolves the configuration for a process: the file named by `config`
    /// (if any), overridden by the remaining pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the named file cannot be loaded.
    pub fn load(map: &BTreeMap<String, String>) -> Result<Self> {
        let base = match map.get("config") {
            Some(path) => Self::from_file(expand_tilde(path))?,
            None => Self::default(),
        };
        Ok(base.merged(map))
    }

    /// Applies `key=value` overrides on top of `self`.
    #[must_use]
    pub fn merged(mut self, map: &BTreeMap<String, String>) -> Self {
        for (key, value) in map {
            match key.as_str() {
                "endpoint" => self.endpoint.clone_from(value),
                "fixtures_dir" => self.fixtures_dir = Some(expand_tilde(value)),
                "start_url" => self.start_url.clone_from(value),
                "data_dir" => self.data_dir = expand_tilde(value),
                "theme" => self.theme_name = Some(value.clone()),
                "theme_file" => self.theme_file = Some(expand_tilde(value)),
                "trace_level" => self.trace_level = Some(value.clone()),
                "request_timeout_secs" => {
                    if let Ok(secs) = value.parse() {
                        self.request_timeout_secs = secs;
                    }
                }
                "bind" => self.bind.clone_from(value),
                _ => {}
            }
        }
        self
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Collects `key=value` command line arguments.
///
/// # Errors
///
/// Returns [`GalleryError::Config`] for an argument without `=`.
///
/// ```rust
/// let map = gallerist::parse_args(["theme=light", "bind=0.0.0.0:8080"]).unwrap();
/// assert_eq!(map["bind"], "0.0.0.0:8080");
/// assert!(gallerist::parse_args(["verbose"]).is_err());
/// ```
pub fn parse_args<I, S>(args: I) -> Result<BTreeMap<String, String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.as_ref();
            arg.split_once('=')
                .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
                .ok_or_else(|| GalleryError::Config(format!("expected key=value, got `{arg}`")))
        })
        .collect()
}

/// Creates the gallery state for a session.
///
/// Theme problems are logged and fall back to the default theme; an invalid
/// `start_url` is an error.
///
/// # Errors
///
/// Returns [`GalleryError::Url`] if `start_url` does not parse.
pub fn initialize(config: &Config) -> Result<GalleryState> {
    tracing::debug!(start_url = %config.start_url, "initializing gallery");

    let url = Url::parse(&config.start_url)?;
    let theme = Theme::resolve(config.theme_name.as_deref(), config.theme_file.as_deref()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    Ok(GalleryState::new(url, theme))
}

/// Chooses the page source: fixture files when `fixtures_dir` is set,
/// otherwise the HTTP endpoint.
///
/// # Errors
///
/// Returns fixture loading errors or an invalid endpoint URL.
pub fn build_repository(config: &Config) -> Result<Arc<dyn PhotoRepository>> {
    if let Some(dir) = &config.fixtures_dir {
        tracing::debug!(dir = %dir.display(), "reading pages from fixtures");
        return Ok(Arc::new(FixtureRepository::open(dir)?));
    }
    let repository = HttpPhotoRepository::new(&config.endpoint, config.request_timeout())?;
    tracing::debug!(endpoint = %repository.endpoint(), "reading pages from endpoint");
    Ok(Arc::new(repository))
}
