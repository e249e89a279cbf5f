//! Page numbering.
//!
//! The backend exposes a fixed, finite number of 1-based pages. [`PageNumber`]
//! can only hold a value in `[1, MAX_PAGES]`, so every page the engine forwards
//! to the repository client is in range by construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of pages the photos backend serves.
pub const MAX_PAGES: u32 = 4;

/// A 1-based page number in `[1, MAX_PAGES]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// The last page.
    pub const LAST: Self = Self(MAX_PAGES);

    /// Returns the page number if `value` is in `[1, MAX_PAGES]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gallerist::domain::PageNumber;
    ///
    /// assert!(PageNumber::new(1).is_some());
    /// assert!(PageNumber::new(0).is_none());
    /// assert!(PageNumber::new(5).is_none());
    /// ```
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value >= 1 && value <= MAX_PAGES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Clamps an arbitrary integer into `[1, MAX_PAGES]`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(1, i64::from(MAX_PAGES));
        Self(u32::try_from(clamped).unwrap_or(1))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The following page, or `None` on the last page.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// The preceding page, or `None` on the first page.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        Self::new(self.0.saturating_sub(1))
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        self.0 == 1
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 == MAX_PAGES
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = String;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("page {value} is outside 1..={MAX_PAGES}"))
    }
}

impl From<PageNumber> for u32 {
    fn from(page: PageNumber) -> Self {
        page.0
    }
}
