//! Domain layer for the gallery.
//!
//! Core types with no knowledge of HTTP, terminals or the runtime loop.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`page`]: Bounded 1-based page numbers
//! - [`photo`]: Photo and photographer records
//!
//! # Examples
//!
//! ```
//! use gallerist::domain::{PageNumber, MAX_PAGES};
//!
//! let last = PageNumber::new(MAX_PAGES).unwrap();
//! assert!(last.is_last());
//! assert_eq!(last.next(), None);
//! ```

pub mod error;
pub mod page;
pub mod photo;

pub use error::{GalleryError, Result};
pub use page::{PageNumber, MAX_PAGES};
pub use photo::{Photo, User};
