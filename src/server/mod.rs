//! The photos endpoint.
//!
//! `GET /api/photos?page=N` answers with page `N` of the fixture pages as a JSON
//! array of photos. A missing or non-numeric `page` means page 1, and numbers
//! outside the available pages are clamped to the nearest one. Failures answer
//! `400` with an empty array, which the gallery treats as an empty page.

use crate::domain::{GalleryError, PageNumber, Photo, Result};
use crate::repository::FixtureRepository;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Route of the photos endpoint.
pub const PHOTOS_ROUTE: &str = "/api/photos";

#[derive(Debug, Deserialize)]
pub struct PageParams {
    page: Option<String>,
}

/// Builds the router over a loaded fixture repository.
pub fn router(repository: Arc<FixtureRepository>) -> Router {
    Router::new()
        .route(PHOTOS_ROUTE, get(photos))
        .with_state(repository)
}

/// Resolves the requested page against the pages that exist.
fn requested_page(raw: Option<&str>, page_count: usize) -> Option<PageNumber> {
    let last = i64::try_from(page_count.max(1)).unwrap_or(i64::MAX);
    let requested = raw.and_then(|value| value.trim().parse::<i64>().ok()).unwrap_or(1);
    let clamped = requested.clamp(1, last);
    u32::try_from(clamped).ok().and_then(PageNumber::new)
}

async fn photos(
    State(repository): State<Arc<FixtureRepository>>,
    Query(params): Query<PageParams>,
) -> (StatusCode, Json<Vec<Photo>>) {
    let _span = tracing::debug_span!("photos_request", page = ?params.page).entered();

    let served = requested_page(params.page.as_deref(), repository.page_count())
        .ok_or_else(|| GalleryError::Fixture("no page to serve".to_string()))
        .and_then(|page| Ok((page, repository.page(page)?.to_vec())));

    match served {
        Ok((page, photos)) => {
            tracing::debug!(page = page.get(), count = photos.len(), "page served");
            (StatusCode::OK, Json(photos))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to serve photos");
            (StatusCode::BAD_REQUEST, Json(Vec::new()))
        }
    }
}

/// Binds `addr` and serves until Ctrl-C.
///
/// # Errors
///
/// Returns I/O errors from binding or serving.
pub async fn serve(repository: FixtureRepository, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, pages = repository.page_count(), "photos server listening");

    axum::serve(listener, router(Arc::new(repository)))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
