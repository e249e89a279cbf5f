//! Terminal rendering layer.
//!
//! Turns gallery state into ANSI-styled output.
//!
//! ```text
//! GalleryState → compute_viewmodel → GalleryViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready types computed from state
//! - [`renderer`]: top-level rendering entry point
//! - [`components`]: header, grid, pagination, preview, empty state, footer
//! - [`helpers`]: cursor positioning and text fitting
//! - [`theme`]: color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardItem, EmptyStateInfo, FooterInfo, GalleryViewModel, HeaderInfo, PaginationInfo, PreviewInfo,
};
