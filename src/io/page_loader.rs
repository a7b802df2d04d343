//! Background page fetching.
//!
//! Each page request runs on its own thread so the GUI stays responsive while
//! the API answers. Results come back over a channel tagged with the feed
//! generation they were issued for; the feed decides whether they are stale.

use eframe::egui;
use gifwall::{FetchError, GiphyResponse, PageRequest, PageSource};
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// A finished page request.
pub struct PageResult {
    /// Feed generation the request was issued at
    pub generation: u64,
    pub result: Result<GiphyResponse, FetchError>,
}

/// Runs page requests against a shared source.
pub struct PageLoader {
    source: Arc<dyn PageSource>,
    sender: Sender<PageResult>,
    receiver: Receiver<PageResult>,
    /// Requests started but not yet polled
    in_flight: usize,
}

impl PageLoader {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        let (sender, receiver) = channel();
        Self {
            source,
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Checks if any request is still running.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Starts a page request on a background thread.
    ///
    /// # Arguments
    /// * `request` - The request handed out by the feed
    /// * `ctx` - egui context for requesting a repaint when the page arrives
    pub fn start(&mut self, request: PageRequest, ctx: &egui::Context) {
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        let ctx_handle = ctx.clone();
        self.in_flight += 1;

        log::debug!(
            "Fetching {} offset={} (generation {})",
            request.params.query,
            request.params.offset,
            request.generation
        );

        thread::spawn(move || {
            // Every started request must answer, or the feed stays fetching
            let result = panic::catch_unwind(AssertUnwindSafe(|| request.execute(source.as_ref())))
                .unwrap_or_else(|_| {
                    log::error!("Page request for {} panicked", request.params.query);
                    Err(FetchError::Aborted("page request panicked".to_string()))
                });

            // The loader may be gone if the window closed meanwhile
            let _ = sender.send(PageResult {
                generation: request.generation,
                result,
            });

            ctx_handle.request_repaint();
        });
    }

    /// Drains every result that has arrived since the last poll.
    ///
    /// Called once per frame in the update loop.
    pub fn poll(&mut self) -> Vec<PageResult> {
        let results: Vec<PageResult> = self.receiver.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(results.len());
        results
    }
}
