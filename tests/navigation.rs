//! Drives the navigation engine end to end: events in, fetches executed by the
//! page worker against the bundled fixture pages, responses fed back.

use async_trait::async_trait;
use gallerist::infrastructure::page_from_url;
use gallerist::repository::{FixtureRepository, PhotoRepository};
use gallerist::worker::{FetchResponse, PageWorker};
use gallerist::{handle_event, Action, Event, GalleryError, GalleryState, PageNumber, Photo, Theme, MAX_PAGES};
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn fixtures() -> FixtureRepository {
    FixtureRepository::open(fixtures_dir()).expect("bundled fixtures load")
}

/// Fixture pages, except that one page always fails.
struct FlakyRepository {
    inner: FixtureRepository,
    failing_page: u32,
}

#[async_trait]
impl PhotoRepository for FlakyRepository {
    async fn fetch_page(&self, page: PageNumber) -> gallerist::Result<Vec<Photo>> {
        if page.get() == self.failing_page {
            return Err(GalleryError::Status { status: 503, page: page.get() });
        }
        self.inner.fetch_page(page).await
    }
}

/// A gallery session whose fetches complete as soon as they are issued.
struct Harness {
    state: GalleryState,
    worker: PageWorker,
    replaced_urls: Vec<Url>,
}

impl Harness {
    fn new(url: &str, repository: Arc<dyn PhotoRepository>) -> Self {
        Self {
            state: GalleryState::new(Url::parse(url).expect("url"), Theme::default()),
            worker: PageWorker::new(repository),
            replaced_urls: Vec::new(),
        }
    }

    async fn send(&mut self, event: Event) {
        let mut queue = vec![event];
        while let Some(event) = queue.pop() {
            let (_, actions) = handle_event(&mut self.state, &event).expect("event handled");
            for action in actions {
                match action {
                    Action::FetchPage(request) => {
                        let response = self.worker.handle_request(request).await;
                        queue.push(Event::PageLoaded(response));
                    }
                    Action::ReplaceUrl(url) => self.replaced_urls.push(url),
                    Action::Quit => {}
                }
            }
        }
    }

    fn page(&self) -> u32 {
        self.state.current_page().get()
    }

    fn selected_id(&self) -> Option<&str> {
        self.state.selected_photo().map(|photo| photo.id.as_str())
    }
}

#[tokio::test]
async fn every_page_loads_its_fixtures() {
    let repository = fixtures();
    let mut harness = Harness::new("http://gallery.local/", Arc::new(repository.clone()));

    for number in 1..=MAX_PAGES {
        harness.send(Event::LoadPage(number)).await;
        let expected = repository.page(PageNumber::new(number).expect("valid")).expect("fixture");
        assert_eq!(harness.page(), number);
        assert_eq!(harness.state.photos(), expected);
        assert!(!harness.state.is_loading());
        assert_eq!(page_from_url(harness.state.url()).get(), number);
    }
    assert_eq!(
        harness.replaced_urls.last().map(Url::as_str),
        Some("http://gallery.local/?page=4")
    );
}

#[tokio::test]
async fn carousel_walks_across_page_boundaries() {
    let repository = fixtures();
    let mut harness = Harness::new("http://gallery.local/?page=1", Arc::new(repository.clone()));
    harness.send(Event::Initialize).await;

    let page_one = harness.state.photos().to_vec();
    harness.send(Event::SelectPhoto(page_one[0].clone())).await;
    assert!(harness.state.disable_prev_navigation());

    for (index, photo) in page_one.iter().enumerate().skip(1) {
        harness.send(Event::SelectNext).await;
        assert_eq!(harness.state.selected_index(), Some(index));
        assert_eq!(harness.selected_id(), Some(photo.id.as_str()));
        assert_eq!(harness.page(), 1);
    }

    harness.send(Event::SelectNext).await;
    let page_two = repository.page(PageNumber::new(2).expect("valid")).expect("fixture");
    assert_eq!(harness.page(), 2);
    assert_eq!(harness.selected_id(), Some(page_two[0].id.as_str()));
    assert_eq!(harness.state.url().as_str(), "http://gallery.local/?page=2");

    harness.send(Event::SelectPrev).await;
    assert_eq!(harness.page(), 1);
    assert_eq!(harness.state.selected_index(), Some(page_one.len() - 1));
    assert_eq!(
        harness.replaced_urls.last().map(Url::as_str),
        Some("http://gallery.local/?page=1")
    );
}

#[tokio::test]
async fn navigation_stops_at_the_last_photo_of_the_last_page() {
    let mut harness = Harness::new("http://gallery.local/?page=4", Arc::new(fixtures()));
    harness.send(Event::Initialize).await;

    let last = harness.state.photos().last().cloned().expect("page 4 has photos");
    harness.send(Event::OpenPreview(last.clone())).await;
    assert!(harness.state.disable_next_navigation());
    assert!(harness.state.disable_next_page_button());

    harness.send(Event::SelectNext).await;
    harness.send(Event::NextPage).await;
    assert_eq!(harness.page(), 4);
    assert_eq!(harness.selected_id(), Some(last.id.as_str()));

    let preview = harness.state.compute_viewmodel(100).preview.expect("preview open");
    assert!(preview.next_disabled);
    assert!(!preview.prev_disabled);
}

#[tokio::test]
async fn url_page_is_clamped_on_start() {
    let mut harness = Harness::new("http://gallery.local/photos?page=12&view=grid", Arc::new(fixtures()));
    harness.send(Event::Initialize).await;
    assert_eq!(harness.page(), MAX_PAGES);

    harness.send(Event::PrevPage).await;
    assert_eq!(harness.page(), 3);
    assert_eq!(
        harness.state.url().as_str(),
        "http://gallery.local/photos?view=grid&page=3"
    );
}

#[tokio::test]
async fn failed_fetch_yields_an_empty_page() {
    let repository = FlakyRepository {
        inner: fixtures(),
        failing_page: 2,
    };
    let mut harness = Harness::new("http://gallery.local/", Arc::new(repository));
    harness.send(Event::Initialize).await;

    let first = harness.state.photos()[0].clone();
    harness.send(Event::SelectPhoto(first.clone())).await;
    harness.send(Event::LoadPage(2)).await;

    assert_eq!(harness.page(), 2);
    assert!(harness.state.photos().is_empty());
    assert_eq!(harness.selected_id(), Some(first.id.as_str()));
    assert_eq!(harness.state.selected_index(), None);

    let viewmodel = harness.state.compute_viewmodel(100);
    assert!(viewmodel.empty_state.is_some());
}

#[tokio::test]
async fn responses_arriving_out_of_order_keep_the_newest_page() {
    let worker = PageWorker::new(Arc::new(fixtures()));
    let mut state = GalleryState::new(Url::parse("http://gallery.local/").expect("url"), Theme::default());

    let (_, first) = handle_event(&mut state, &Event::LoadPage(2)).expect("handled");
    let (_, second) = handle_event(&mut state, &Event::LoadPage(3)).expect("handled");
    let [Action::FetchPage(slow)] = first.as_slice() else {
        panic!("expected a fetch, got {first:?}");
    };
    let [Action::FetchPage(fast)] = second.as_slice() else {
        panic!("expected a fetch, got {second:?}");
    };

    let fast_response = worker.handle_request(fast.clone()).await;
    let slow_response: FetchResponse = worker.handle_request(slow.clone()).await;
    let expected = fast_response.photos.clone();

    handle_event(&mut state, &Event::PageLoaded(fast_response)).expect("handled");
    let (render, actions) = handle_event(&mut state, &Event::PageLoaded(slow_response)).expect("handled");

    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.current_page().get(), 3);
    assert_eq!(state.photos(), expected.as_slice());
}
