//! HTTP photo repository.
//!
//! Fetches pages from the photos endpoint with `GET <endpoint>?page=<N>`. The
//! response body is the JSON array the backend handler produces.

use crate::domain::{GalleryError, PageNumber, Photo, Result};
use crate::repository::backend::PhotoRepository;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Repository backed by the photos HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpPhotoRepository {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPhotoRepository {
    /// Builds a repository for `endpoint` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an absolute URL or the HTTP
    /// client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .user_agent(concat!("gallerist/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::debug!(endpoint = %endpoint, timeout_secs = timeout.as_secs(), "http repository ready");
        Ok(Self { client, endpoint })
    }

    /// The endpoint pages are fetched from.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PhotoRepository for HttpPhotoRepository {
    #[tracing::instrument(level = "debug", name = "http_fetch_page", skip(self, page), fields(page = page.get()))]
    async fn fetch_page(&self, page: PageNumber) -> Result<Vec<Photo>> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("page", page.get())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::Status {
                status: status.as_u16(),
                page: page.get(),
            });
        }

        let photos: Vec<Photo> = response.json().await?;
        tracing::debug!(count = photos.len(), "page received");
        Ok(photos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_endpoints() {
        let err = HttpPhotoRepository::new("/api/photos", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, GalleryError::Url(_)));
    }

    #[test]
    fn keeps_the_parsed_endpoint() {
        let repo = HttpPhotoRepository::new("http://127.0.0.1:4000/api/photos", Duration::from_secs(5))
            .expect("valid endpoint");
        assert_eq!(repo.endpoint().path(), "/api/photos");
    }
}
