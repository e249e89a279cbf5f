//! Repository layer: where photo pages come from.
//!
//! # Modules
//!
//! - `backend`: [`PhotoRepository`] trait abstraction
//! - `http`: photos endpoint client
//! - `fixtures`: provider JSON files on disk
//! - `models`: provider record types and the remap into domain photos

pub mod backend;
pub mod fixtures;
pub mod http;
pub mod models;

pub use backend::PhotoRepository;
pub use fixtures::{fixture_file_name, FixtureRepository};
pub use http::HttpPhotoRepository;
pub use models::{remap_photos, ProviderPhoto};
