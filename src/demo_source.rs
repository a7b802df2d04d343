//! Offline stand-in for the GIPHY API.
//!
//! Pages are generated deterministically from a seed, so the same request
//! always yields the same records. Image URLs use the `demo://` scheme and are
//! rendered procedurally by the [`ImageFetcher`] impl:
//!
//! ```text
//! demo://{width}x{height}/{seed}         animated, 8 frames
//! demo://{width}x{height}/{seed}/still   single frame
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use egui::ColorImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::decode::{DecodedFrame, DecodedImage};
use crate::error::FetchError;
use crate::model::{GiphyGif, GiphyImage, GiphyImages, GiphyResponse, GiphyUser, Meta, Pagination};
use crate::query::{PageParams, Query};
use crate::source::{ImageFetcher, PageSource};

const DEFAULT_TOTAL: u32 = 500;
const DEFAULT_SEED: u64 = 42;
const FIXED_WIDTH: u32 = 200;
const FRAME_COUNT: usize = 8;
const FRAME_DELAY: Duration = Duration::from_millis(100);

const ADJECTIVES: &[&str] = &[
    "Happy", "Sleepy", "Dancing", "Confused", "Excited", "Grumpy", "Tiny", "Dramatic",
];
const NOUNS: &[&str] = &[
    "Cat", "Dog", "Penguin", "Otter", "Robot", "Cactus", "Wizard", "Pancake",
];
const USERNAMES: &[&str] = &["pixelpaws", "loopmaker", "", "giphystudios", ""];

pub struct DemoSource {
    total: u32,
    seed: u64,
    latency: Duration,
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoSource {
    pub fn new() -> Self {
        Self {
            total: DEFAULT_TOTAL,
            seed: DEFAULT_SEED,
            latency: Duration::ZERO,
        }
    }

    pub fn with_config(total: u32, seed: u64) -> Self {
        Self {
            total,
            seed,
            latency: Duration::ZERO,
        }
    }

    /// Sleeps this long before answering a page request.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn query_seed(&self, query: &Query) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        query.hash(&mut hasher);
        hasher.finish()
    }

    /// Size of the full result set for `query`.
    pub fn total_for(&self, query: &Query) -> u32 {
        match query {
            Query::Trending => self.total,
            Query::Search(_) => {
                let mut rng = StdRng::seed_from_u64(self.query_seed(query));
                rng.gen_range(0..=self.total / 2)
            }
        }
    }

    fn record(&self, query: &Query, index: u32) -> GiphyGif {
        let item_seed = self.query_seed(query).wrapping_add(index as u64);
        let mut rng = StdRng::seed_from_u64(item_seed);

        let height = rng.gen_range(80..=360u32);
        let animated = format!("demo://{}x{}/{}", FIXED_WIDTH, height, item_seed);
        let still = format!("{}/still", animated);

        // one in eight records has no title, to exercise the fallback
        let title = if rng.gen_ratio(1, 8) {
            String::new()
        } else {
            let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
            let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
            match query {
                Query::Search(keyword) => format!("{} {} {} GIF", adjective, keyword, noun),
                Query::Trending => format!("{} {} GIF", adjective, noun),
            }
        };
        let username = USERNAMES[rng.gen_range(0..USERNAMES.len())].to_string();

        let rendition = |url: &str| GiphyImage {
            url: url.to_string(),
            width: FIXED_WIDTH.to_string(),
            height: height.to_string(),
            ..Default::default()
        };

        GiphyGif {
            id: format!("demo-{:x}-{}", self.query_seed(query) & 0xffff, index),
            url: animated.clone(),
            slug: format!("demo-{}", index),
            title,
            username: username.clone(),
            rating: "g".to_string(),
            images: GiphyImages {
                fixed_width: rendition(&animated),
                fixed_width_still: rendition(&still),
                ..Default::default()
            },
            user: (!username.is_empty()).then(|| GiphyUser {
                display_name: username.clone(),
                username,
                ..Default::default()
            }),
        }
    }
}

impl PageSource for DemoSource {
    fn fetch_page(&self, params: &PageParams) -> Result<GiphyResponse, FetchError> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        let total = self.total_for(&params.query);
        let start = params.offset.min(total);
        let end = params.offset.saturating_add(params.limit).min(total);
        let data: Vec<GiphyGif> = (start..end).map(|i| self.record(&params.query, i)).collect();

        log::debug!("Demo page {} offset={} -> {} items", params.query, params.offset, data.len());

        Ok(GiphyResponse {
            pagination: Pagination {
                offset: params.offset,
                count: data.len() as u32,
                total_count: total,
            },
            data,
            meta: Meta {
                status: 200,
                msg: "OK".to_string(),
                response_id: "demo".to_string(),
            },
        })
    }
}

struct DemoResource {
    width: usize,
    height: usize,
    seed: u64,
    still: bool,
}

fn parse_demo_url(url: &str) -> Option<DemoResource> {
    let rest = url.strip_prefix("demo://")?;
    let mut parts = rest.split('/');
    let (width, height) = parts.next()?.split_once('x')?;
    let seed = parts.next()?.parse().ok()?;
    let still = match parts.next() {
        None => false,
        Some("still") => true,
        Some(_) => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(DemoResource {
        width: width.parse().ok()?,
        height: height.parse().ok()?,
        seed,
        still,
    })
}

/// Diagonal stripes in a seed-derived color, shifted by `phase`.
fn render_frame(resource: &DemoResource, phase: usize) -> ColorImage {
    let mut rng = StdRng::seed_from_u64(resource.seed);
    let base = [rng.gen_range(60..=230u8), rng.gen_range(60..=230u8), rng.gen_range(60..=230u8)];
    let shade = base.map(|c| c / 2);

    let mut rgba = Vec::with_capacity(resource.width * resource.height * 4);
    for y in 0..resource.height {
        for x in 0..resource.width {
            let band = (x + y + phase * 4) / 16 % 2;
            let [r, g, b] = if band == 0 { base } else { shade };
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
    }
    ColorImage::from_rgba_unmultiplied([resource.width, resource.height], &rgba)
}

impl ImageFetcher for DemoSource {
    fn fetch_image(&self, url: &str) -> Result<DecodedImage, FetchError> {
        let resource = parse_demo_url(url)
            .filter(|r| r.width > 0 && r.height > 0)
            .ok_or_else(|| FetchError::UnknownResource(url.to_string()))?;

        if resource.still {
            return Ok(DecodedImage::still(render_frame(&resource, 0)));
        }

        let frames = (0..FRAME_COUNT)
            .map(|phase| DecodedFrame {
                image: Arc::new(render_frame(&resource, phase)),
                delay: FRAME_DELAY,
            })
            .collect();
        Ok(DecodedImage::new(frames)?)
    }
}
