//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`GalleryViewModel`] from the state, then
//! hand it to the component layout. Output goes to any [`Write`], which keeps
//! the renderer testable against an in-memory buffer.
//!
//! # Example
//!
//! ```rust
//! use gallerist::app::GalleryState;
//! use gallerist::ui::{render, Theme};
//! use url::Url;
//!
//! let state = GalleryState::new(Url::parse("http://localhost:3000/").unwrap(), Theme::default());
//! let mut frame = Vec::new();
//! render(&mut frame, &state, 24, 80).unwrap();
//! assert!(String::from_utf8_lossy(&frame).contains("Page 1 / 4"));
//! ```

use crate::app::GalleryState;
use crate::ui::components;
use crate::ui::helpers::clear_screen;
use crate::ui::viewmodel::GalleryViewModel;
use std::io::{self, Write};

/// Clears the screen and draws the gallery for a `rows` x `cols` terminal.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render<W: Write>(out: &mut W, state: &GalleryState, rows: usize, cols: usize) -> io::Result<()> {
    let viewmodel: GalleryViewModel = state.compute_viewmodel(cols);

    clear_screen(out)?;
    components::render_gallery(out, &viewmodel, &state.theme, rows, cols)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::domain::{Photo, User};
    use crate::ui::Theme;
    use crate::worker::FetchResponse;
    use url::Url;

    fn photo(id: &str, description: &str) -> Photo {
        Photo {
            id: id.to_string(),
            color: "#204060".to_string(),
            description: description.to_string(),
            image_url: format!("https://images.example/{id}"),
            thumb_url: format!("https://images.example/{id}?w=200"),
            user: User {
                id: "u1".to_string(),
                username: "junepark".to_string(),
                name: "June Park".to_string(),
                image_url: String::new(),
            },
        }
    }

    fn loaded_state(photos: Vec<Photo>) -> GalleryState {
        let mut state = GalleryState::new(
            Url::parse("http://gallery.local/?page=1").expect("url"),
            Theme::default(),
        );
        let request = state.begin_load(crate::domain::PageNumber::FIRST, crate::app::Transition::Initial);
        handle_event(
            &mut state,
            &Event::PageLoaded(FetchResponse {
                request_id: request.request_id,
                page: request.page,
                photos,
            }),
        )
        .expect("handled");
        state
    }

    fn frame(state: &GalleryState) -> String {
        let mut out = Vec::new();
        render(&mut out, state, 30, 90).expect("render");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn grid_shows_every_card() {
        let state = loaded_state(vec![
            photo("a", "Harbor at dawn"),
            photo("b", "Pine ridge"),
            photo("c", "Salt flats"),
            photo("d", "City rain"),
        ]);
        let screen = frame(&state);
        for label in ["Harbor at dawn", "Pine ridge", "Salt flats", "City rain", "by June Park"] {
            assert!(screen.contains(label), "missing {label}");
        }
        assert!(screen.contains("Page 1 / 4"));
        assert!(!screen.contains("No photos on this page"));
    }

    #[test]
    fn empty_page_shows_message() {
        let state = loaded_state(vec![]);
        assert!(frame(&state).contains("No photos on this page"));
    }

    #[test]
    fn preview_shows_selected_photo() {
        let mut state = loaded_state(vec![photo("a", "Harbor at dawn"), photo("b", "Pine ridge")]);
        handle_event(&mut state, &Event::OpenPreview(photo("b", "Pine ridge"))).expect("handled");
        let screen = frame(&state);
        assert!(screen.contains("https://images.example/b"));
        assert!(screen.contains("2 of 2"));
        assert!(screen.contains("June Park (@junepark)"));
    }

    #[test]
    fn disabled_page_button_is_dimmed() {
        let state = loaded_state(vec![photo("a", "Harbor at dawn")]);
        let screen = frame(&state);
        let dimmed_prev = format!("{}{}[ < prev page ]", Theme::dim(), Theme::fg(&state.theme.colors.disabled_fg));
        assert!(screen.contains(&dimmed_prev));
    }
}
