//! Background image loading.
//!
//! A fixed pool of worker threads pulls URLs off a shared queue, downloads and
//! decodes them, and sends the frames back. Texture upload happens on the GUI
//! thread in [`ImageLoader::poll`]. Load state per URL lives in an LRU cache
//! with a byte budget, so images scrolled out of view are dropped and reloaded
//! on demand. Images drawn in the current frame are never dropped.

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use egui::{TextureHandle, TextureOptions};
use gifwall::image_cache::ByteSize;
use gifwall::{DecodedImage, ImageCache, ImageFetcher, ImageSlot};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const DEFAULT_WORKERS: usize = 4;

/// A decoded image with one texture per frame.
pub struct LoadedImage {
    decoded: DecodedImage,
    textures: Vec<TextureHandle>,
}

impl LoadedImage {
    /// Texture to draw `elapsed` into the animation clock.
    pub fn texture_at(&self, elapsed: Duration) -> &TextureHandle {
        let index = self.decoded.frame_index_at(elapsed);
        &self.textures[index.min(self.textures.len() - 1)]
    }

    pub fn decoded(&self) -> &DecodedImage {
        &self.decoded
    }

    pub fn is_animated(&self) -> bool {
        self.decoded.is_animated()
    }
}

impl ByteSize for LoadedImage {
    fn byte_size(&self) -> usize {
        // CPU frames plus their GPU copies
        self.decoded.byte_size() * 2
    }
}

type LoadOutcome = (String, Result<DecodedImage, String>);

pub struct ImageLoader {
    jobs: Sender<String>,
    results: Receiver<LoadOutcome>,
    cache: ImageCache<LoadedImage>,
}

impl ImageLoader {
    /// Spawns `workers` threads fetching through `fetcher`.
    ///
    /// Workers exit once the loader is dropped and the queue drains.
    pub fn new(
        fetcher: Arc<dyn ImageFetcher>,
        ctx: &egui::Context,
        workers: usize,
        budget_bytes: usize,
    ) -> Self {
        let (jobs, job_receiver) = unbounded::<String>();
        let (result_sender, results) = unbounded::<LoadOutcome>();

        for _ in 0..workers.max(1) {
            let job_receiver = job_receiver.clone();
            let result_sender = result_sender.clone();
            let fetcher = Arc::clone(&fetcher);
            let ctx_handle = ctx.clone();

            thread::spawn(move || {
                while let Ok(url) = job_receiver.recv() {
                    let result = fetcher.fetch_image(&url).map_err(|e| e.to_string());
                    if result_sender.send((url, result)).is_err() {
                        break;
                    }
                    ctx_handle.request_repaint();
                }
            });
        }

        Self {
            jobs,
            results,
            cache: ImageCache::new(budget_bytes),
        }
    }

    /// Starts a frame; images not drawn since the previous frame become
    /// evictable.
    ///
    /// Called once per frame in the update loop, before drawing.
    pub fn begin_frame(&mut self) {
        self.cache.begin_frame();
    }

    /// Returns the load state of `url`, queueing a load on first sight.
    pub fn slot(&mut self, url: &str) -> Option<&ImageSlot<LoadedImage>> {
        if self.cache.request(url) && self.jobs.send(url.to_string()).is_err() {
            self.cache.complete(url, Err("image workers stopped".to_string()));
        }
        self.cache.get(url)
    }

    /// Ready image for `url` without queueing anything.
    pub fn ready(&self, url: &str) -> Option<&LoadedImage> {
        self.cache.peek(url).and_then(ImageSlot::ready)
    }

    /// Uploads textures for every image that finished since the last poll.
    ///
    /// Called once per frame in the update loop. Returns the number of
    /// completed loads.
    pub fn poll(&mut self, ctx: &egui::Context) -> usize {
        let mut completed = 0;
        for (url, result) in self.results.try_iter() {
            let result = result.map(|decoded| {
                let textures = decoded
                    .frames()
                    .iter()
                    .enumerate()
                    .map(|(i, frame)| {
                        ctx.load_texture(
                            format!("{}#{}", url, i),
                            Arc::clone(&frame.image),
                            TextureOptions::LINEAR,
                        )
                    })
                    .collect();
                LoadedImage { decoded, textures }
            });

            if let Err(error) = &result {
                log::warn!("Failed to load {}: {}", url, error);
            }
            self.cache.complete(&url, result);
            completed += 1;
        }
        completed
    }

    pub fn cached_images(&self) -> usize {
        self.cache.len()
    }

    pub fn cached_bytes(&self) -> usize {
        self.cache.bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gifwall::DemoSource;
    use std::time::Instant;

    fn settle(loader: &mut ImageLoader, ctx: &egui::Context, expected: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut done = 0;
        while done < expected && Instant::now() < deadline {
            done += loader.poll(ctx);
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_loads_and_fails() {
        let ctx = egui::Context::default();
        let mut loader = ImageLoader::new(Arc::new(DemoSource::new()), &ctx, 2, usize::MAX);

        assert!(matches!(loader.slot("demo://8x4/5"), Some(ImageSlot::Loading)));
        assert!(matches!(loader.slot("https://nowhere.example/x.gif"), Some(ImageSlot::Loading)));
        settle(&mut loader, &ctx, 2);

        let image = loader.ready("demo://8x4/5").unwrap();
        assert!(image.is_animated());
        assert_eq!(image.decoded().size(), [8, 4]);
        assert!(matches!(
            loader.slot("https://nowhere.example/x.gif"),
            Some(ImageSlot::Failed(_))
        ));
    }

    #[test]
    fn test_same_url_loads_once() {
        let ctx = egui::Context::default();
        let mut loader = ImageLoader::new(Arc::new(DemoSource::new()), &ctx, 1, usize::MAX);
        loader.slot("demo://4x4/1/still");
        loader.slot("demo://4x4/1/still");
        settle(&mut loader, &ctx, 1);
        assert_eq!(loader.cached_images(), 1);
        assert!(loader.ready("demo://4x4/1/still").is_some());
    }
}
