//! View model types representing renderable gallery state.
//!
//! View models are computed from state by `GalleryState::compute_viewmodel()`
//! and consumed by the renderer. They carry no behavior, only display-ready
//! data: labels are already truncated and every enabled/disabled decision has
//! already been made.
//!
//! # Example
//!
//! ```rust
//! use gallerist::ui::viewmodel::{CardItem, PaginationInfo};
//!
//! let card = CardItem {
//!     position: 1,
//!     label: "Morning fog".to_string(),
//!     author: "June".to_string(),
//!     thumb_url: "https://images.example/fog?w=200".to_string(),
//!     swatch: Some((0x33, 0x66, 0x99)),
//!     is_selected: false,
//!     has_focus: true,
//! };
//! let pagination = PaginationInfo { prev_disabled: true, next_disabled: false };
//! assert!(card.has_focus && pagination.prev_disabled);
//! ```

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryViewModel {
    pub header: HeaderInfo,

    /// Cards of the current page, in page order.
    pub cards: Vec<CardItem>,

    /// Width of one grid card in columns.
    pub card_width: usize,

    pub pagination: PaginationInfo,

    /// Present while the preview modal is open.
    pub preview: Option<PreviewInfo>,

    /// Present when a completed page has no photos.
    pub empty_state: Option<EmptyStateInfo>,

    pub footer: FooterInfo,
}

/// Title bar and status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// e.g. `Page 2 / 4`.
    pub page_label: String,
    /// The gallery URL as it currently stands.
    pub location: String,
    pub loading: bool,
}

/// One photo card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    /// 1-based position on the page; also the number typed to open it.
    pub position: usize,
    pub label: String,
    pub author: String,
    pub thumb_url: String,
    /// Dominant color of the photo, when it parses.
    pub swatch: Option<(u8, u8, u8)>,
    pub is_selected: bool,
    /// The card the preview was opened from, once the preview is closed again.
    pub has_focus: bool,
}

/// Pagination buttons below the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Contents of the preview modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewInfo {
    pub title: String,
    pub image_url: String,
    pub author: String,
    /// e.g. `2 of 9`; absent when the selected photo is not on this page.
    pub position: Option<String>,
    pub swatch: Option<(u8, u8, u8)>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Message shown in place of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateInfo {
    pub message: String,
    pub subtitle: String,
}

/// Keybinding hints for the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
