//! Infrastructure layer for environment interactions.
//!
//! - [`paths`]: data directory resolution and `~` expansion
//! - [`page_url`]: the `page` query parameter of the gallery location

pub mod page_url;
pub mod paths;

pub use page_url::{page_from_url, with_page, PAGE_PARAM};
pub use paths::{default_data_dir, expand_tilde};
