//! Event handling and state transition logic.
//!
//! This module implements the gallery navigation engine: it takes user input
//! and page responses, mutates [`GalleryState`], and returns the side effects
//! the runtime must perform.
//!
//! # Architecture
//!
//! 1. Events arrive from the runtime (parsed commands) or the page worker
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations happen through `GalleryState` methods
//! 4. Actions are collected and returned for execution
//!
//! Page navigation is two-phase. Moving to another page emits
//! [`Action::FetchPage`] right away; selection and the URL only change once the
//! matching [`Event::PageLoaded`] comes back. Responses to superseded requests
//! are dropped there.
//!
//! # Example
//!
//! ```rust
//! use gallerist::app::{handle_event, Action, Event, GalleryState};
//! use gallerist::ui::Theme;
//! use url::Url;
//!
//! let url = Url::parse("http://localhost:3000/?page=3")?;
//! let mut state = GalleryState::new(url, Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::Initialize)?;
//! assert!(matches!(&actions[..], [Action::FetchPage(request)] if request.page.get() == 3));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::Transition;
use crate::app::{Action, GalleryState};
use crate::domain::error::Result;
use crate::domain::{PageNumber, Photo};
use crate::infrastructure::{page_from_url, with_page};
use crate::worker::FetchResponse;

/// Events triggered by user input or page responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Starts the session on the page named by the gallery URL.
    Initialize,

    /// Loads a page by number. Out-of-range numbers are ignored.
    LoadPage(u32),

    /// Selects a photo by identity.
    SelectPhoto(Photo),

    /// Carousel forward: next photo, crossing into the next page at the end.
    SelectNext,

    /// Carousel back: previous photo, crossing into the previous page at the start.
    SelectPrev,

    /// Pagination forward.
    NextPage,

    /// Pagination back.
    PrevPage,

    /// A page fetch completed (successfully or as an empty page).
    PageLoaded(FetchResponse),

    /// Selects a photo and opens it in the preview.
    OpenPreview(Photo),

    /// Closes the preview; focus returns to the card that opened it.
    ClosePreview,

    /// Fetches the current page again.
    Reload,

    /// Ends the session.
    Quit,
}

/// Processes an event, mutates gallery state, and returns actions to execute.
///
/// The returned flag says whether the view must be re-rendered.
///
/// # Errors
///
/// Reserved for state mutations that can fail; none of the current
/// transitions do. Fetch failures never surface here.
pub fn handle_event(state: &mut GalleryState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Initialize => {
            let page = page_from_url(state.url());
            tracing::debug!(page = page.get(), url = %state.url(), "initializing gallery");
            Ok(request_page(state, page, Transition::Initial))
        }
        Event::LoadPage(number) => {
            let Some(page) = PageNumber::new(*number) else {
                tracing::warn!(page = number, "ignoring load of out-of-range page");
                return Ok((false, vec![]));
            };
            Ok(request_page(state, page, Transition::Jump))
        }
        Event::Reload => {
            let page = state.current_page();
            Ok(request_page(state, page, Transition::Load))
        }
        Event::SelectPhoto(photo) => {
            state.select_photo(photo.clone());
            Ok((true, vec![]))
        }
        Event::SelectNext => {
            if state.is_turning_page() {
                tracing::debug!("page change in flight, ignoring step");
                return Ok((false, vec![]));
            }
            let target = state.selected_index().map_or(0, |index| index + 1);
            if state.select_at(target) {
                return Ok((true, vec![]));
            }

            state.current_page().next().map_or_else(
                || {
                    tracing::debug!("already on the last photo of the last page");
                    Ok((false, vec![]))
                },
                |page| Ok(request_page(state, page, Transition::Forward)),
            )
        }
        Event::SelectPrev => {
            if state.is_turning_page() {
                tracing::debug!("page change in flight, ignoring step");
                return Ok((false, vec![]));
            }
            let Some(index) = state.selected_index() else {
                tracing::debug!("no selection to step back from");
                return Ok((false, vec![]));
            };
            if index > 0 && state.select_at(index - 1) {
                return Ok((true, vec![]));
            }

            state.current_page().prev().map_or_else(
                || {
                    tracing::debug!("already on the first photo of the first page");
                    Ok((false, vec![]))
                },
                |page| Ok(request_page(state, page, Transition::Backward)),
            )
        }
        Event::NextPage => match state.current_page().next() {
            Some(page) => Ok(request_page(state, page, Transition::Forward)),
            None => Ok((false, vec![])),
        },
        Event::PrevPage => match state.current_page().prev() {
            Some(page) => Ok(request_page(state, page, Transition::Backward)),
            None => Ok((false, vec![])),
        },
        Event::PageLoaded(response) => {
            let page = response.page;
            let count = response.photos.len();

            let Some(transition) = state.finish_load(response.clone()) else {
                return Ok((false, vec![]));
            };

            tracing::debug!(page = page.get(), count, transition = ?transition, "page applied");
            state.apply_selection(transition.selection_after_load());
            if state.preview_open && state.selected_photo().is_none() {
                tracing::debug!("nothing left to preview, closing");
                state.preview_open = false;
            }

            let mut actions = vec![];
            if transition.syncs_url() && page_from_url(state.url()) != page {
                let url = with_page(state.url(), page);
                state.set_url(url.clone());
                actions.push(Action::ReplaceUrl(url));
            }

            Ok((true, actions))
        }
        Event::OpenPreview(photo) => {
            tracing::debug!(photo_id = %photo.id, "opening preview");
            state.focus_anchor = Some(photo.id.clone());
            state.select_photo(photo.clone());
            state.preview_open = true;
            Ok((true, vec![]))
        }
        Event::ClosePreview => {
            if !state.preview_open {
                return Ok((false, vec![]));
            }
            state.preview_open = false;
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Starts loading `page`; the header shows the loading state right away.
fn request_page(state: &mut GalleryState, page: PageNumber, transition: Transition) -> (bool, Vec<Action>) {
    let request = state.begin_load(page, transition);
    tracing::debug!(
        request_id = request.request_id.0,
        page = page.get(),
        transition = ?transition,
        "page requested"
    );
    (true, vec![Action::FetchPage(request)])
}
