//! Application-level coordination and workflow management.
//!
//! Handles navigation, page loading, scroll-driven paging and the copy
//! action, coordinating between the feed, the loaders and the clipboard.

use crate::app::AppState;
use crate::io::{ImageLoader, PageLoader, PageResult};
use gifwall::{copy_with_fallback, display_url, ApplyOutcome, ClipboardError, ClipboardSink, CopyOutcome, Route};
use log::{debug, info, trace};
use std::time::Instant;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Moves to `route`.
    ///
    /// A route with a query activates it on the feed; re-navigating to the
    /// active query keeps the loaded results. Any other route drops the feed.
    pub fn navigate(state: &mut AppState, loader: &mut PageLoader, route: Route, ctx: &egui::Context) {
        info!("Navigating to {}", route.to_path());
        state.search.sync_from_route(&route);

        match route.query() {
            Some(query) => {
                if let Some(request) = state.feed.activate(query) {
                    state.viewport.reset();
                    loader.start(request, ctx);
                }
            }
            None => {
                state.feed.deactivate();
                state.viewport.reset();
            }
        }

        state.route = route;
    }

    /// Applies every page result that arrived since the last frame.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if any result changed the feed.
    pub fn check_page_completion(state: &mut AppState, loader: &mut PageLoader) -> bool {
        let mut changed = false;
        for PageResult { generation, result } in loader.poll() {
            match state.feed.apply(generation, result) {
                ApplyOutcome::Appended(count) => {
                    debug!("Appended {} items, feed now has {}", count, state.feed.items().len());
                    changed = true;
                }
                ApplyOutcome::Failed => changed = true,
                ApplyOutcome::Stale => {}
            }
        }
        changed
    }

    /// Handles a change of the feed's scroll offset.
    ///
    /// # Arguments
    /// * `offset` - New scroll offset, recorded as handled
    /// * `fraction` - `(offset + viewport height) / document height`
    pub fn handle_scroll(
        state: &mut AppState,
        loader: &mut PageLoader,
        offset: f32,
        fraction: f32,
        ctx: &egui::Context,
    ) {
        trace!("Scroll {:?} -> {}", state.viewport.last_offset(), offset);
        state.viewport.record(offset);
        if let Some(request) = state.feed.on_scroll(fraction) {
            debug!("Scroll fraction {:.2} crossed the threshold", fraction);
            loader.start(request, ctx);
        }
    }

    /// Explicit "load more" or retry.
    pub fn load_more(state: &mut AppState, loader: &mut PageLoader, ctx: &egui::Context) {
        if let Some(request) = state.feed.load_more() {
            loader.start(request, ctx);
        }
    }

    /// Copies the item at `index` and shows the acknowledgment toast.
    pub fn copy_gif<C: ClipboardSink + ?Sized>(
        state: &mut AppState,
        images: &ImageLoader,
        clipboard: &mut C,
        index: usize,
    ) -> Option<CopyOutcome> {
        let item = state.feed.items().get(index)?;
        let url = display_url(item, state.animation.is_paused());

        let image = images
            .ready(url)
            .map(|loaded| loaded.decoded().first_frame().as_ref())
            .ok_or_else(|| ClipboardError::ImageNotReady(url.to_string()));
        let outcome = copy_with_fallback(clipboard, image, url);

        state.toast.show(outcome.acknowledgment(), Instant::now());
        Some(outcome)
    }

    /// Flips the global animation flag.
    pub fn toggle_animations(state: &mut AppState) {
        state.animation.toggle();
        info!("Animations {}", if state.animation.is_paused() { "paused" } else { "playing" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SourceMode;
    use gifwall::{DemoSource, Query};
    use std::sync::Arc;
    use std::time::Duration;

    fn setup() -> (AppState, PageLoader, egui::Context) {
        let state = AppState::new(25, false, SourceMode::Demo);
        let loader = PageLoader::new(Arc::new(DemoSource::new()));
        (state, loader, egui::Context::default())
    }

    fn wait_for_page(state: &mut AppState, loader: &mut PageLoader) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while state.feed.is_pending() && Instant::now() < deadline {
            ApplicationCoordinator::check_page_completion(state, loader);
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[derive(Default)]
    struct TextOnlyClipboard {
        texts: Vec<String>,
    }

    impl ClipboardSink for TextOnlyClipboard {
        fn write_image(&mut self, _image: &egui::ColorImage) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }

        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.texts.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_navigate_to_search() {
        let (mut state, mut loader, ctx) = setup();
        ApplicationCoordinator::navigate(&mut state, &mut loader, Route::parse("/search/cats"), &ctx);

        assert_eq!(state.feed.query(), Some(&Query::Search("cats".to_string())));
        assert_eq!(state.search.text(), "cats");
        assert!(state.feed.is_pending());

        wait_for_page(&mut state, &mut loader);
        assert!(!state.feed.is_pending());
    }

    #[test]
    fn test_navigate_same_route_keeps_results() {
        let (mut state, mut loader, ctx) = setup();
        ApplicationCoordinator::navigate(&mut state, &mut loader, Route::Trending, &ctx);
        wait_for_page(&mut state, &mut loader);
        let generation = state.feed.generation();

        ApplicationCoordinator::navigate(&mut state, &mut loader, Route::Trending, &ctx);
        assert_eq!(state.feed.generation(), generation);
        assert_eq!(state.feed.items().len(), 25);
    }

    #[test]
    fn test_not_found_drops_feed() {
        let (mut state, mut loader, ctx) = setup();
        ApplicationCoordinator::navigate(&mut state, &mut loader, Route::Trending, &ctx);
        ApplicationCoordinator::navigate(&mut state, &mut loader, Route::parse("/nope"), &ctx);

        assert!(state.feed.query().is_none());
        assert_eq!(state.route, Route::NotFound("/nope".to_string()));
    }

    #[test]
    fn test_scroll_loads_next_page() {
        let (mut state, mut loader, ctx) = setup();
        ApplicationCoordinator::navigate(&mut state, &mut loader, Route::Trending, &ctx);
        wait_for_page(&mut state, &mut loader);

        ApplicationCoordinator::handle_scroll(&mut state, &mut loader, 120.0, 0.5, &ctx);
        assert!(!state.feed.is_fetching_next_page());
        assert_eq!(state.viewport.last_offset(), Some(120.0));

        ApplicationCoordinator::handle_scroll(&mut state, &mut loader, 900.0, 0.95, &ctx);
        assert!(state.feed.is_fetching_next_page());
    }

    #[test]
    fn test_copy_falls_back_and_acknowledges() {
        let (mut state, mut loader, ctx) = setup();
        let images = ImageLoader::new(Arc::new(DemoSource::new()), &ctx, 1, usize::MAX);
        ApplicationCoordinator::navigate(&mut state, &mut loader, Route::Trending, &ctx);
        wait_for_page(&mut state, &mut loader);

        let mut clipboard = TextOnlyClipboard::default();
        let outcome = ApplicationCoordinator::copy_gif(&mut state, &images, &mut clipboard, 0);

        assert_eq!(outcome, Some(CopyOutcome::Url));
        assert_eq!(clipboard.texts, vec![state.feed.items()[0].image_url.clone()]);
        assert_eq!(state.toast.active(Instant::now()), Some("Copied to clipboard"));
        assert_eq!(ApplicationCoordinator::copy_gif(&mut state, &images, &mut clipboard, 9999), None);
    }
}
