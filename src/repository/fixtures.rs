//! Fixture-file photo repository.
//!
//! Serves pages from provider-format JSON files named
//! `photos-<N>.fixtures.json`, one file per page. All pages are loaded and
//! remapped once when the repository is opened and kept in memory afterwards.
//!
//! Used by the backend handler, and by the terminal front-end when it runs
//! without a server.

use crate::domain::{GalleryError, PageNumber, Photo, Result, MAX_PAGES};
use crate::repository::backend::PhotoRepository;
use crate::repository::models::{remap_photos, ProviderPhoto};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// File name of the fixture for `page`.
#[must_use]
pub fn fixture_file_name(page: u32) -> String {
    format!("photos-{page}.fixtures.json")
}

/// In-memory repository loaded from fixture files.
#[derive(Debug, Clone)]
pub struct FixtureRepository {
    /// Page `n` lives at index `n - 1`.
    pages: Vec<Vec<Photo>>,
    source: Option<PathBuf>,
}

impl FixtureRepository {
    /// Loads consecutive fixture pages from `dir`, starting at page 1.
    ///
    /// Loading stops at the first missing file or after [`MAX_PAGES`] pages.
    ///
    /// # Errors
    ///
    /// Returns an error if page 1 is missing, or a fixture file cannot be read
    /// or is not a valid provider page.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        tracing::debug!(dir = ?dir, "loading fixture pages");

        let mut pages = Vec::new();
        for page in 1..=MAX_PAGES {
            let path = dir.join(fixture_file_name(page));
            if !path.exists() {
                tracing::debug!(path = ?path, "no more fixture pages");
                break;
            }
            pages.push(Self::load_page(&path)?);
        }

        if pages.is_empty() {
            return Err(GalleryError::Fixture(format!(
                "no {} in {}",
                fixture_file_name(1),
                dir.display()
            )));
        }

        tracing::debug!(page_count = pages.len(), "fixture pages loaded");
        Ok(Self {
            pages,
            source: Some(dir.to_path_buf()),
        })
    }

    /// Builds a repository from already remapped pages; page 1 first.
    #[must_use]
    pub fn from_pages(pages: Vec<Vec<Photo>>) -> Self {
        Self { pages, source: None }
    }

    fn load_page(path: &Path) -> Result<Vec<Photo>> {
        let contents = std::fs::read_to_string(path)?;
        let records: Vec<ProviderPhoto> = serde_json::from_str(&contents).map_err(|e| {
            GalleryError::Fixture(format!("failed to parse {}: {e}", path.display()))
        })?;
        tracing::trace!(path = ?path, count = records.len(), "fixture page parsed");
        Ok(remap_photos(records))
    }

    /// Number of pages available.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Directory the fixtures were loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Returns a page without going through the async trait.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Fixture`] if the page has no fixture.
    pub fn page(&self, page: PageNumber) -> Result<&[Photo]> {
        let index = usize::try_from(page.get() - 1).unwrap_or(usize::MAX);
        self.pages
            .get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| GalleryError::Fixture(format!("page {page} has no fixture")))
    }
}

#[async_trait]
impl PhotoRepository for FixtureRepository {
    async fn fetch_page(&self, page: PageNumber) -> Result<Vec<Photo>> {
        let photos = self.page(page)?.to_vec();
        tracing::debug!(page = page.get(), count = photos.len(), "fixture page served");
        Ok(photos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"[
        {"id": "a", "color": "#111111", "description": "first", "alt_description": null,
         "urls": {"regular": "ra", "thumb": "ta"},
         "user": {"id": "u", "username": "kim", "name": "Kim", "profile_image": {"medium": "m"}}},
        {"id": "b", "color": "#222222", "description": null, "alt_description": null,
         "urls": {"regular": "rb", "thumb": "tb"},
         "user": {"id": "u", "username": "kim", "name": "Kim", "profile_image": {"medium": "m"}}}
    ]"##;

    #[test]
    fn loads_consecutive_pages_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(fixture_file_name(1)), PAGE).expect("write page 1");
        std::fs::write(dir.path().join(fixture_file_name(2)), "[]").expect("write page 2");
        std::fs::write(dir.path().join(fixture_file_name(4)), PAGE).expect("write page 4");

        let repo = FixtureRepository::open(dir.path()).expect("fixtures load");
        assert_eq!(repo.page_count(), 2);
        assert_eq!(repo.source(), Some(dir.path()));

        let first = repo.page(PageNumber::FIRST).expect("page 1");
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].description, "Photo by kim");
        assert!(repo.page(PageNumber::new(4).expect("valid")).is_err());
    }

    #[test]
    fn missing_first_page_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = FixtureRepository::open(dir.path()).unwrap_err();
        assert!(matches!(err, GalleryError::Fixture(_)));
    }

    #[test]
    fn malformed_page_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(fixture_file_name(1)), "{not json").expect("write");
        assert!(FixtureRepository::open(dir.path()).is_err());
    }

    #[tokio::test]
    async fn serves_pages_through_the_trait() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(fixture_file_name(1)), PAGE).expect("write");
        let repo = FixtureRepository::open(dir.path()).expect("fixtures load");

        let photos = repo.fetch_page(PageNumber::FIRST).await.expect("page 1");
        assert_eq!(photos.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), ["a", "b"]);
        assert!(repo.fetch_page(PageNumber::LAST).await.is_err());
    }
}
