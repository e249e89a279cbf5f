//! Photo repository abstraction.
//!
//! This module defines the [`PhotoRepository`] trait that abstracts over where
//! pages come from. The page worker only talks to this trait, so the runtime can
//! switch between the HTTP endpoint and local fixtures without touching the
//! navigation engine.
//!
//! The trait is deliberately one method wide: the gallery only ever asks for a
//! whole page.

use crate::domain::{PageNumber, Photo, Result};
use async_trait::async_trait;

/// Source of photo pages.
///
/// Implementations return errors freely; converting a failure into an empty
/// page is the page worker's job, not the repository's.
///
/// # Implementations
///
/// - [`HttpPhotoRepository`](super::HttpPhotoRepository): `GET <endpoint>?page=N`
/// - [`FixtureRepository`](super::FixtureRepository): provider JSON files on disk
///
/// # Examples
///
/// ```no_run
/// use gallerist::domain::PageNumber;
/// use gallerist::repository::{FixtureRepository, PhotoRepository};
///
/// # async fn run() -> gallerist::Result<()> {
/// let repository = FixtureRepository::open("data")?;
/// let photos = repository.fetch_page(PageNumber::FIRST).await?;
/// println!("{} photos", photos.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Fetches every photo of `page`, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be retrieved or decoded.
    async fn fetch_page(&self, page: PageNumber) -> Result<Vec<Photo>>;
}
