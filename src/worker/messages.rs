//! Page worker message types.
//!
//! The navigation engine never awaits a fetch. It emits a [`FetchRequest`]
//! tagged with a request id from its generation counter, and later receives a
//! [`FetchResponse`] carrying the same id. The id is what lets the engine drop
//! responses that a newer request has superseded.

use crate::domain::{PageNumber, Photo};
use serde::{Deserialize, Serialize};

/// Identifier of one page request, unique within a gallery session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A request for one page of photos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    pub request_id: RequestId,
    pub page: PageNumber,
}

/// The outcome of a [`FetchRequest`].
///
/// A failed fetch is indistinguishable from an empty page here: the worker has
/// already logged the failure and replaced it with an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResponse {
    pub request_id: RequestId,
    pub page: PageNumber,
    pub photos: Vec<Photo>,
}

impl FetchResponse {
    /// An empty response answering `request`.
    #[must_use]
    pub const fn empty(request: &FetchRequest) -> Self {
        Self {
            request_id: request.request_id,
            page: request.page,
            photos: Vec::new(),
        }
    }

    /// Returns `true` if this response answers `request`.
    #[must_use]
    pub fn answers(&self, request_id: RequestId, page: PageNumber) -> bool {
        self.request_id == request_id && self.page == page
    }
}
