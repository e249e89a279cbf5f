//! Gallery state and view model computation.
//!
//! This module defines [`GalleryState`], the single owned state of a gallery
//! session: the current page, its photos, the selection, the in-flight page
//! request, preview visibility and the gallery URL.
//!
//! # Architecture
//!
//! Core data (photos, selected photo) is stored; everything positional is
//! derived. The selected photo is kept by identity and its index is looked up
//! in an `id → position` map that is rebuilt whenever `photos` is replaced, so
//! the index can never go stale. The navigation flags the views need are
//! methods computed from that, never stored.
//!
//! # Request sequencing
//!
//! [`GalleryState::begin_load`] hands out request ids from a generation counter
//! and remembers the newest one. [`GalleryState::finish_load`] applies a
//! response only if it carries that id; anything older was superseded and is
//! dropped.
//!
//! # Example
//!
//! ```rust
//! use gallerist::app::GalleryState;
//! use gallerist::ui::Theme;
//! use url::Url;
//!
//! let url = Url::parse("http://localhost:3000/?page=2").unwrap();
//! let state = GalleryState::new(url, Theme::default());
//! assert!(state.photos().is_empty());
//! assert_eq!(state.selected_index(), None);
//! let viewmodel = state.compute_viewmodel(80);
//! assert!(viewmodel.preview.is_none());
//! ```

use super::modes::{SelectionAfterLoad, Transition};
use crate::domain::{PageNumber, Photo, MAX_PAGES};
use crate::ui::components::CARD_GAP;
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, EmptyStateInfo, FooterInfo, GalleryViewModel, HeaderInfo, PaginationInfo, PreviewInfo,
};
use crate::worker::{FetchRequest, FetchResponse, RequestId};
use std::collections::HashMap;
use url::Url;

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 3;

/// The page request currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLoad {
    pub request_id: RequestId,
    pub page: PageNumber,
    pub transition: Transition,
}

/// State of one gallery session.
#[derive(Debug, Clone)]
pub struct GalleryState {
    /// Page whose photos are shown, or being fetched.
    current_page: PageNumber,

    /// Photos of `current_page`, replaced wholesale when a load completes.
    photos: Vec<Photo>,

    /// Position of each photo in `photos`, by id.
    positions: HashMap<String, usize>,

    /// Selected photo, by identity. May be absent from `photos`.
    selected: Option<Photo>,

    /// Newest page request; responses to any other request are stale.
    pending: Option<PendingLoad>,

    /// Generation counter for request ids.
    last_request_id: u64,

    /// Gallery location; its `page` parameter tracks completed page transitions.
    url: Url,

    /// Whether the preview modal is shown.
    pub preview_open: bool,

    /// Id of the card that opened the preview; focus returns there on close.
    pub focus_anchor: Option<String>,

    /// Color scheme used when rendering.
    pub theme: Theme,
}

impl GalleryState {
    /// Creates the state for a session at `url`.
    ///
    /// Nothing is fetched yet: the page is read from the URL when the session is
    /// initialized.
    #[must_use]
    pub fn new(url: Url, theme: Theme) -> Self {
        Self {
            current_page: PageNumber::FIRST,
            photos: Vec::new(),
            positions: HashMap::new(),
            selected: None,
            pending: None,
            last_request_id: 0,
            url,
            preview_open: false,
            focus_anchor: None,
            theme,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> PageNumber {
        self.current_page
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub const fn selected_photo(&self) -> Option<&Photo> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&PendingLoad> {
        self.pending.as_ref()
    }

    /// Whether a step to the adjacent page is waiting for its photos.
    ///
    /// `current_page` already names the target page while `photos` still
    /// holds the page being left.
    #[must_use]
    pub fn is_turning_page(&self) -> bool {
        self.pending.is_some_and(|pending| pending.transition.is_step())
    }

    /// Whether a page fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Position of a photo id on the current page.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Position of the selected photo on the current page.
    ///
    /// `None` when nothing is selected or the selected photo is not on this page.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_ref().and_then(|photo| self.position_of(&photo.id))
    }

    /// Selects `photo` and returns its position on the current page.
    ///
    /// A photo that is not on the current page stays selected but has no
    /// position; callers treat that as no selection.
    pub fn select_photo(&mut self, photo: Photo) -> Option<usize> {
        let index = self.position_of(&photo.id);
        tracing::debug!(photo_id = %photo.id, index = ?index, "photo selected");
        self.selected = Some(photo);
        index
    }

    /// Selects the photo at `index` on the current page.
    ///
    /// Returns `false`, leaving the selection alone, if `index` is out of range.
    pub fn select_at(&mut self, index: usize) -> bool {
        match self.photos.get(index) {
            Some(photo) => {
                self.selected = Some(photo.clone());
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replaces the photo list and rebuilds the position map.
    pub fn replace_photos(&mut self, photos: Vec<Photo>) {
        self.positions = photos
            .iter()
            .enumerate()
            .map(|(index, photo)| (photo.id.clone(), index))
            .collect();
        self.photos = photos;
    }

    /// Starts loading `page` and returns the request to hand to the worker.
    ///
    /// `page` becomes the current page immediately. The new request supersedes
    /// any request still in flight.
    pub fn begin_load(&mut self, page: PageNumber, transition: Transition) -> FetchRequest {
        self.last_request_id += 1;
        let request_id = RequestId(self.last_request_id);

        if let Some(previous) = self.pending.replace(PendingLoad {
            request_id,
            page,
            transition,
        }) {
            tracing::debug!(
                superseded = previous.request_id.0,
                superseded_page = previous.page.get(),
                "page request superseded"
            );
        }

        self.current_page = page;
        FetchRequest { request_id, page }
    }

    /// Applies a page response if it answers the newest request.
    ///
    /// Returns the transition that started the request, or `None` for a stale
    /// response, which leaves the state untouched. Selection is not changed here.
    pub fn finish_load(&mut self, response: FetchResponse) -> Option<Transition> {
        let pending = self.pending?;
        if !response.answers(pending.request_id, pending.page) {
            tracing::debug!(
                request_id = response.request_id.0,
                pending_request_id = pending.request_id.0,
                "dropping stale page response"
            );
            return None;
        }

        self.pending = None;
        self.replace_photos(response.photos);
        Some(pending.transition)
    }

    /// Moves the selection as a completed transition requires.
    pub fn apply_selection(&mut self, selection: SelectionAfterLoad) {
        let target = match selection {
            SelectionAfterLoad::Keep => return,
            SelectionAfterLoad::First => 0,
            SelectionAfterLoad::Last => self.photos.len().saturating_sub(1),
        };
        if !self.select_at(target) {
            self.clear_selection();
        }
    }

    /// Replaces the gallery location.
    pub fn set_url(&mut self, url: Url) {
        self.url = url;
    }

    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.current_page.is_first()
    }

    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.current_page.is_last()
    }

    #[must_use]
    pub fn is_first_photo_in_page(&self) -> bool {
        self.selected_index() == Some(0)
    }

    #[must_use]
    pub fn is_last_photo_in_page(&self) -> bool {
        !self.photos.is_empty() && self.selected_index() == Some(self.photos.len() - 1)
    }

    /// Carousel "previous" is disabled on the first photo of the first page.
    #[must_use]
    pub fn disable_prev_navigation(&self) -> bool {
        self.is_first_page() && self.is_first_photo_in_page()
    }

    /// Carousel "next" is disabled on the last photo of the last page.
    #[must_use]
    pub fn disable_next_navigation(&self) -> bool {
        self.is_last_page() && self.is_last_photo_in_page()
    }

    #[must_use]
    pub const fn disable_prev_page_button(&self) -> bool {
        self.is_first_page()
    }

    #[must_use]
    pub const fn disable_next_page_button(&self) -> bool {
        self.is_last_page()
    }

    /// Computes a renderable view model for a terminal `cols` wide.
    ///
    /// The grid lays out [`GRID_COLUMNS`] cards per row; card labels are
    /// truncated to the card width. The preview is present only while the modal
    /// is open and a photo is selected.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> GalleryViewModel {
        let card_width = Self::card_width(cols);
        let focus_id = if self.preview_open { None } else { self.focus_anchor.as_deref() };

        let cards = self
            .photos
            .iter()
            .enumerate()
            .map(|(index, photo)| CardItem {
                position: index + 1,
                label: truncate(&photo.description, card_width),
                author: truncate(&photo.user.name, card_width.saturating_sub(3)),
                thumb_url: photo.thumb_url.clone(),
                swatch: photo.swatch_rgb(),
                is_selected: self.selected.as_ref().is_some_and(|selected| selected.same_as(photo)),
                has_focus: focus_id == Some(photo.id.as_str()),
            })
            .collect();

        let empty_state = (self.photos.is_empty() && !self.is_loading()).then(|| EmptyStateInfo {
            message: "No photos on this page".to_string(),
            subtitle: format!("Page {} of {MAX_PAGES} came back empty", self.current_page),
        });

        GalleryViewModel {
            header: self.compute_header(),
            cards,
            card_width,
            pagination: PaginationInfo {
                prev_disabled: self.disable_prev_page_button(),
                next_disabled: self.disable_next_page_button(),
            },
            preview: self.compute_preview(cols),
            empty_state,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: " Gallery ".to_string(),
            page_label: format!("Page {} / {MAX_PAGES}", self.current_page),
            location: self.url.to_string(),
            loading: self.is_loading(),
        }
    }

    fn compute_preview(&self, cols: usize) -> Option<PreviewInfo> {
        if !self.preview_open {
            return None;
        }
        let photo = self.selected.as_ref()?;

        let position = self
            .selected_index()
            .map(|index| format!("{} of {}", index + 1, self.photos.len()));

        Some(PreviewInfo {
            title: truncate(&photo.description, cols.saturating_sub(4)),
            image_url: photo.image_url.clone(),
            author: format!("{} (@{})", photo.user.name, photo.user.username),
            position,
            swatch: photo.swatch_rgb(),
            prev_disabled: self.disable_prev_navigation(),
            next_disabled: self.disable_next_navigation(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.preview_open {
            "h/prev: previous photo  l/next: next photo  esc/close: close preview  q: quit"
        } else {
            "<n>/open <n>: preview photo  [: previous page  ]: next page  r: reload  q: quit"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn card_width(cols: usize) -> usize {
        const MIN_CARD_WIDTH: usize = 12;
        (cols.saturating_sub(CARD_GAP * (GRID_COLUMNS - 1)) / GRID_COLUMNS).max(MIN_CARD_WIDTH)
    }
}
