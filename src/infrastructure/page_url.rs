//! Page number synchronization with the gallery URL.
//!
//! The current page lives in the `page` query parameter of the gallery
//! location. It is read once when a session starts and rewritten (a history
//! replace, never a reload) after every page transition.

use crate::domain::PageNumber;
use url::Url;

/// Query parameter holding the 1-based page number.
pub const PAGE_PARAM: &str = "page";

/// Reads the page number from `url`.
///
/// Uses the last `page` pair when the parameter repeats. A missing or
/// non-numeric value yields page 1; numeric values outside the valid range are
/// clamped.
///
/// # Examples
///
/// ```
/// use gallerist::infrastructure::page_from_url;
/// use url::Url;
///
/// let url = Url::parse("http://localhost:3000/?page=3").unwrap();
/// assert_eq!(page_from_url(&url).get(), 3);
///
/// let url = Url::parse("http://localhost:3000/?page=abc").unwrap();
/// assert_eq!(page_from_url(&url).get(), 1);
/// ```
#[must_use]
pub fn page_from_url(url: &Url) -> PageNumber {
    let raw = url
        .query_pairs()
        .filter(|(key, _)| key == PAGE_PARAM)
        .map(|(_, value)| value.into_owned())
        .last();

    match raw.as_deref().map(str::trim).map(str::parse::<i64>) {
        Some(Ok(value)) => PageNumber::clamped(value),
        Some(Err(_)) => {
            tracing::debug!(raw = ?raw, "non-numeric page parameter, using page 1");
            PageNumber::FIRST
        }
        None => PageNumber::FIRST,
    }
}

/// Returns `url` with its `page` parameter set to `page`.
///
/// Every other query pair keeps its position and value; repeated `page` pairs
/// collapse into one, appended last.
#[must_use]
pub fn with_page(url: &Url, page: PageNumber) -> Url {
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != PAGE_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut updated = url.clone();
    updated
        .query_pairs_mut()
        .clear()
        .extend_pairs(others)
        .append_pair(PAGE_PARAM, &page.to_string());
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("test url")
    }

    #[test]
    fn missing_parameter_means_first_page() {
        assert_eq!(page_from_url(&url("http://gallery.local/")), PageNumber::FIRST);
        assert_eq!(page_from_url(&url("http://gallery.local/?q=cats")), PageNumber::FIRST);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(page_from_url(&url("http://gallery.local/?page=0")), PageNumber::FIRST);
        assert_eq!(page_from_url(&url("http://gallery.local/?page=-7")), PageNumber::FIRST);
        assert_eq!(page_from_url(&url("http://gallery.local/?page=40")), PageNumber::LAST);
    }

    #[test]
    fn last_repeated_parameter_wins() {
        assert_eq!(page_from_url(&url("http://gallery.local/?page=2&page=3")).get(), 3);
    }

    #[test]
    fn writing_preserves_other_parameters() {
        let base = url("http://gallery.local/photos?theme=dark&page=1&lang=en");
        let updated = with_page(&base, PageNumber::new(2).expect("valid"));
        assert_eq!(updated.path(), "/photos");
        assert_eq!(updated.query(), Some("theme=dark&lang=en&page=2"));
        assert_eq!(page_from_url(&updated).get(), 2);
    }

    #[test]
    fn writing_adds_parameter_when_absent() {
        let updated = with_page(&url("http://gallery.local/"), PageNumber::LAST);
        assert_eq!(updated.as_str(), "http://gallery.local/?page=4");
    }
}
