//! Gallery session
//!
//! Owns the state a page would keep globally: the loaded collection, the
//! render container and the search input. Startup loads once; every UI
//! event afterwards re-runs the search synchronously.

use crate::config::GalleryConfig;
use crate::dom::{Container, Image};
use crate::error::LoadError;
use crate::filter::filter_breeds;
use crate::loader::{load_breeds, BreedSource};
use crate::model::BreedRecord;
use crate::render::{render, render_load_error, render_loading, CARD_CLASS};

/// Element id of the render container
pub const CONTAINER_ID: &str = "breeds-container";

/// Events from the search controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Search input content changed
    Input(String),
    /// Search button activated
    SearchClicked,
}

/// Where the gallery is in its one-shot load
#[derive(Debug, Default)]
pub enum LoadState {
    /// Startup has not run
    #[default]
    Idle,
    /// Waiting for the source
    Loading,
    /// Collection loaded
    Loaded,
    /// Load failed; the collection stays empty
    Failed(LoadError),
}

/// A breed gallery bound to one container
#[derive(Debug)]
pub struct Gallery {
    config: GalleryConfig,
    breeds: Vec<BreedRecord>,
    container: Container,
    query: String,
    state: LoadState,
}

impl Gallery {
    /// Create gallery with an empty collection
    #[inline]
    #[must_use]
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            breeds: Vec::new(),
            container: Container::new(CONTAINER_ID),
            query: String::new(),
            state: LoadState::Idle,
        }
    }

    /// Load the collection and draw it
    ///
    /// Shows the loading message while waiting. On failure the error panel
    /// replaces the gallery and the collection stays empty. Runs at most
    /// once; later calls are ignored.
    pub async fn start<S>(&mut self, source: &S)
    where
        S: BreedSource + ?Sized,
    {
        if !matches!(self.state, LoadState::Idle) {
            tracing::warn!("gallery already started, ignoring");
            return;
        }

        self.begin_loading();
        let result = load_breeds(source, &self.config.data_file).await;
        self.finish_loading(result);
    }

    /// Enter the loading state
    pub fn begin_loading(&mut self) {
        self.state = LoadState::Loading;
        render_loading(&mut self.container);
    }

    /// Apply the outcome of the load
    pub fn finish_loading(&mut self, result: Result<Vec<BreedRecord>, LoadError>) {
        match result {
            Ok(breeds) => {
                self.breeds = breeds;
                self.state = LoadState::Loaded;
                render(&mut self.container, &self.breeds, &self.config);
            }
            Err(e) => {
                tracing::error!("Error loading local data: {e}");
                self.breeds.clear();
                render_load_error(&mut self.container, &e, &self.config.data_file);
                self.state = LoadState::Failed(e);
            }
        }
    }

    /// Dispatch a UI event
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Input(text) => self.query = text,
            UiEvent::SearchClicked => {}
        }
        self.search();
    }

    /// Render the records matching the current input value
    pub fn search(&mut self) {
        let matches = filter_breeds(&self.breeds, &self.query);
        tracing::debug!(query = %self.query, matches = matches.len(), "search");
        render(&mut self.container, matches, &self.config);
    }

    /// Records matching the current input value
    #[must_use]
    pub fn visible(&self) -> Vec<&BreedRecord> {
        filter_breeds(&self.breeds, &self.query)
    }

    /// Report a display failure for the image of the card at `index`
    ///
    /// Returns whether the image switched to its fallback.
    pub fn image_failed(&mut self, index: usize) -> bool {
        self.container
            .elements_with_class_mut(CARD_CLASS)
            .nth(index)
            .and_then(|card| card.image_mut())
            .is_some_and(Image::fail)
    }

    /// Loaded collection
    #[inline]
    #[must_use]
    pub fn breeds(&self) -> &[BreedRecord] {
        &self.breeds
    }

    /// Render container
    #[inline]
    #[must_use]
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Current search input value
    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Load state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(GalleryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{Response, StaticSource};
    use crate::render::{LOADING, NO_RESULTS};

    const DATA: &str = r#"[
        {"id": 1, "name": "Akita", "reference_image_id": "abc"},
        {"id": 2, "name": "Basenji"}
    ]"#;

    fn source() -> StaticSource {
        StaticSource::new().with_response("dog-data.json", Response::ok(DATA))
    }

    #[test]
    fn begin_loading_shows_message() {
        let mut gallery = Gallery::default();
        gallery.begin_loading();
        assert!(matches!(gallery.state(), LoadState::Loading));
        assert_eq!(gallery.container().text_content(), LOADING);
    }

    #[tokio::test]
    async fn start_renders_full_collection() {
        let mut gallery = Gallery::default();
        gallery.start(&source()).await;

        assert!(matches!(gallery.state(), LoadState::Loaded));
        assert_eq!(gallery.breeds().len(), 2);
        assert_eq!(gallery.container().elements_with_class(CARD_CLASS).count(), 2);
    }

    #[tokio::test]
    async fn start_runs_once() {
        let mut gallery = Gallery::default();
        gallery.start(&source()).await;
        gallery.start(&StaticSource::new()).await;

        assert!(matches!(gallery.state(), LoadState::Loaded));
        assert_eq!(gallery.breeds().len(), 2);
    }

    #[tokio::test]
    async fn input_and_click_share_logic() {
        let mut gallery = Gallery::default();
        gallery.start(&source()).await;

        gallery.handle(UiEvent::Input("aki".to_string()));
        let after_input = gallery.container().clone();

        gallery.handle(UiEvent::SearchClicked);
        assert_eq!(gallery.container().children(), after_input.children());
        assert_eq!(gallery.visible().len(), 1);
    }

    #[tokio::test]
    async fn clearing_input_restores_everything() {
        let mut gallery = Gallery::default();
        gallery.start(&source()).await;

        gallery.handle(UiEvent::Input("zz".to_string()));
        assert_eq!(gallery.container().text_content(), NO_RESULTS);

        gallery.handle(UiEvent::Input("  ".to_string()));
        assert_eq!(gallery.container().elements_with_class(CARD_CLASS).count(), 2);
    }

    #[tokio::test]
    async fn image_failure_is_per_card_and_one_shot() {
        let mut gallery = Gallery::default();
        gallery.start(&source()).await;

        assert!(gallery.image_failed(0));
        assert!(!gallery.image_failed(0));
        assert!(gallery.image_failed(1));
        assert!(!gallery.image_failed(5));

        let srcs: Vec<&str> = gallery
            .container()
            .elements_with_class(CARD_CLASS)
            .filter_map(|card| card.image().map(Image::src))
            .collect();
        assert_eq!(
            srcs,
            [
                "https://placedog.net/500/300?random=1",
                "https://placedog.net/500/300?random=2"
            ]
        );
    }
}
