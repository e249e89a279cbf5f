//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` after each
//! event, and the runtime executes them in order: spawning page fetches on the
//! worker, replacing the gallery URL, or ending the session.
//!
//! # Example
//!
//! ```rust
//! use gallerist::app::Action;
//! use gallerist::domain::PageNumber;
//! use gallerist::worker::{FetchRequest, RequestId};
//!
//! let actions = vec![Action::FetchPage(FetchRequest {
//!     request_id: RequestId(1),
//!     page: PageNumber::FIRST,
//! })];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::FetchRequest;
use url::Url;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetches a page on the worker.
    ///
    /// The response must be fed back as
    /// [`Event::PageLoaded`](crate::app::Event::PageLoaded).
    FetchPage(FetchRequest),

    /// Replaces the current location with this URL (history replace, no reload).
    ReplaceUrl(Url),

    /// Ends the session.
    Quit,
}
