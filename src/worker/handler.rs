//! Page worker: the repository client boundary.
//!
//! The worker runs page fetches off the event loop and posts each
//! [`FetchResponse`] back over a channel. This is the single place fetch
//! failures are handled: they are logged and converted into an empty page, so
//! nothing above this layer ever sees a fetch error.

use crate::domain::error::Result;
use crate::domain::Photo;
use crate::repository::PhotoRepository;
use crate::worker::{FetchRequest, FetchResponse};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Executes [`FetchRequest`]s against a [`PhotoRepository`].
#[derive(Clone)]
pub struct PageWorker {
    repository: Arc<dyn PhotoRepository>,
}

impl PageWorker {
    #[must_use]
    pub fn new(repository: Arc<dyn PhotoRepository>) -> Self {
        Self { repository }
    }

    /// Converts a repository result into a page, logging failures.
    fn handle_fetch_result(request: &FetchRequest, result: Result<Vec<Photo>>) -> FetchResponse {
        match result {
            Ok(photos) => {
                tracing::debug!(count = photos.len(), "page fetched");
                FetchResponse {
                    request_id: request.request_id,
                    page: request.page,
                    photos,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "page fetch failed, serving an empty page");
                FetchResponse::empty(request)
            }
        }
    }

    /// Fetches the requested page. Never fails.
    pub async fn handle_request(&self, request: FetchRequest) -> FetchResponse {
        let span = tracing::debug_span!(
            "worker_fetch_page",
            request_id = request.request_id.0,
            page = request.page.get()
        );

        async {
            let result = self.repository.fetch_page(request.page).await;
            Self::handle_fetch_result(&request, result)
        }
        .instrument(span)
        .await
    }

    /// Runs `request` on the tokio runtime and posts the response to `results`.
    ///
    /// A closed channel means the session is gone; the response is dropped.
    pub fn spawn(&self, request: FetchRequest, results: UnboundedSender<FetchResponse>) -> JoinHandle<()> {
        let worker = self.clone();
        tokio::spawn(async move {
            let response = worker.handle_request(request).await;
            if let Err(e) = results.send(response) {
                tracing::debug!(request_id = e.0.request_id.0, "session closed before page arrived");
            }
        })
    }
}

impl std::fmt::Debug for PageWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageWorker").finish_non_exhaustive()
    }
}
