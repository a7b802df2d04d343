//! Decoding of downloaded images into RGBA frames.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use egui::ColorImage;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageFormat};

use crate::error::DecodeError;

/// Delay used for frames that declare 10 ms or less, as browsers do.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone)]
pub struct DecodedFrame {
    pub image: Arc<ColorImage>,
    pub delay: Duration,
}

/// One still image or a full animation.
#[derive(Clone)]
pub struct DecodedImage {
    frames: Vec<DecodedFrame>,
    size: [usize; 2],
    cycle: Duration,
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("frames", &self.frames.len())
            .field("size", &self.size)
            .field("cycle", &self.cycle)
            .finish()
    }
}

impl DecodedImage {
    pub fn new(frames: Vec<DecodedFrame>) -> Result<Self, DecodeError> {
        let first = frames.first().ok_or(DecodeError::Empty)?;
        let size = first.image.size;
        let cycle = frames.iter().map(|f| f.delay).sum();
        Ok(Self { frames, size, cycle })
    }

    pub fn still(image: ColorImage) -> Self {
        let size = image.size;
        Self {
            frames: vec![DecodedFrame {
                image: Arc::new(image),
                delay: Duration::ZERO,
            }],
            size,
            cycle: Duration::ZERO,
        }
    }

    pub fn frames(&self) -> &[DecodedFrame] {
        &self.frames
    }

    /// Width and height in pixels.
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }

    /// First frame; what goes on the clipboard.
    pub fn first_frame(&self) -> &Arc<ColorImage> {
        &self.frames[0].image
    }

    /// Frame to show `elapsed` after the animation started, looping forever.
    pub fn frame_index_at(&self, elapsed: Duration) -> usize {
        if !self.is_animated() || self.cycle.is_zero() {
            return 0;
        }

        let cycle_nanos = self.cycle.as_nanos();
        let mut remaining = elapsed.as_nanos() % cycle_nanos;
        for (index, frame) in self.frames.iter().enumerate() {
            let delay = frame.delay.as_nanos();
            if remaining < delay {
                return index;
            }
            remaining -= delay;
        }
        self.frames.len() - 1
    }

    /// Approximate memory held by the decoded frames.
    pub fn byte_size(&self) -> usize {
        self.frames.len() * self.size[0] * self.size[1] * 4
    }
}

fn frame_delay(numer: u32, denom: u32) -> Duration {
    let millis = if denom == 0 { 0 } else { numer / denom };
    if millis <= 10 {
        DEFAULT_FRAME_DELAY
    } else {
        Duration::from_millis(millis as u64)
    }
}

/// Decodes a GIF into all of its frames, or any other supported format into
/// a single still frame.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    match image::guess_format(bytes)? {
        ImageFormat::Gif => decode_gif(bytes),
        _ => {
            let rgba = image::load_from_memory(bytes)?.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            Ok(DecodedImage::still(ColorImage::from_rgba_unmultiplied(
                size,
                rgba.as_raw(),
            )))
        }
    }
}

fn decode_gif(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let frames = decoder.into_frames().collect_frames()?;

    let frames = frames
        .into_iter()
        .map(|frame| {
            let (numer, denom) = frame.delay().numer_denom_ms();
            let buffer = frame.into_buffer();
            let size = [buffer.width() as usize, buffer.height() as usize];
            DecodedFrame {
                image: Arc::new(ColorImage::from_rgba_unmultiplied(size, buffer.as_raw())),
                delay: frame_delay(numer, denom),
            }
        })
        .collect();

    DecodedImage::new(frames)
}
