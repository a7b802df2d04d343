//! Copying a GIF to the system clipboard, image first and URL as fallback.

use std::borrow::Cow;

use egui::ColorImage;
use log::{debug, warn};

use crate::error::ClipboardError;

/// Message shown after every copy attempt.
pub const COPY_ACKNOWLEDGMENT: &str = "Copied to clipboard";

/// Platform clipboard writes.
pub trait ClipboardSink {
    fn write_image(&mut self, image: &ColorImage) -> Result<(), ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// What actually ended up on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Image,
    Url,
    /// Neither write succeeded. Only logged.
    Failed,
}

impl CopyOutcome {
    pub fn acknowledgment(&self) -> &'static str {
        COPY_ACKNOWLEDGMENT
    }
}

/// Copies the decoded image, falling back to the URL as text.
///
/// Never fails: every error is logged and the caller shows
/// [`COPY_ACKNOWLEDGMENT`] regardless of the outcome.
pub fn copy_with_fallback<C: ClipboardSink + ?Sized>(
    sink: &mut C,
    image: Result<&ColorImage, ClipboardError>,
    url: &str,
) -> CopyOutcome {
    match image.and_then(|image| sink.write_image(image)) {
        Ok(()) => {
            debug!("Copied image for {}", url);
            return CopyOutcome::Image;
        }
        Err(error) => warn!("Image copy failed ({}), copying URL instead", error),
    }

    match sink.write_text(url) {
        Ok(()) => {
            debug!("Copied URL {}", url);
            CopyOutcome::Url
        }
        Err(error) => {
            warn!("Failed to copy {}: {}", url, error);
            CopyOutcome::Failed
        }
    }
}

/// System clipboard through `arboard`.
///
/// Opening the clipboard can fail (headless sessions, missing display
/// server); the sink then reports [`ClipboardError::Unavailable`] on every
/// write instead of failing construction.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(error) => {
                warn!("System clipboard unavailable: {}", error);
                None
            }
        };
        Self { inner }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        self.inner.as_mut().ok_or(ClipboardError::Unavailable)
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_image(&mut self, image: &ColorImage) -> Result<(), ClipboardError> {
        let bytes: Vec<u8> = image
            .pixels
            .iter()
            .flat_map(|pixel| pixel.to_srgba_unmultiplied())
            .collect();
        let data = arboard::ImageData {
            width: image.size[0],
            height: image.size[1],
            bytes: Cow::Owned(bytes),
        };
        self.clipboard()?
            .set_image(data)
            .map_err(|e| ClipboardError::Denied(e.to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Denied(e.to_string()))
    }
}
