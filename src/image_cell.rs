//! Per-cell image decisions: which URL to show, what phase the cell is in,
//! and how the image is cropped into its box.

use egui::{pos2, Rect, Vec2};

use crate::image_cache::ImageSlot;
use crate::model::DisplayItem;

/// Static rendition while animations are paused, animated otherwise.
pub fn display_url(item: &DisplayItem, animations_paused: bool) -> &str {
    if animations_paused {
        &item.static_image_url
    } else {
        &item.image_url
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPhase {
    /// Skeleton until the image arrives.
    Placeholder,
    Loaded,
    /// Inline "Image not found" placeholder. Loading is over.
    Error,
}

impl CellPhase {
    pub fn of<T>(slot: Option<&ImageSlot<T>>) -> Self {
        match slot {
            None | Some(ImageSlot::Loading) => CellPhase::Placeholder,
            Some(ImageSlot::Ready(_)) => CellPhase::Loaded,
            Some(ImageSlot::Failed(_)) => CellPhase::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        *self == CellPhase::Placeholder
    }

    /// The title overlay is drawn once loading has finished.
    pub fn shows_title(&self) -> bool {
        *self == CellPhase::Loaded
    }
}

/// UV rectangle that crops `image_size` to fill `box_size` without
/// distortion, centered (CSS `object-fit: cover`).
pub fn cover_uv(image_size: [usize; 2], box_size: Vec2) -> Rect {
    let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    let [iw, ih] = image_size;
    if iw == 0 || ih == 0 || box_size.x <= 0.0 || box_size.y <= 0.0 {
        return full;
    }

    let image_aspect = iw as f32 / ih as f32;
    let box_aspect = box_size.x / box_size.y;

    if image_aspect > box_aspect {
        let visible = box_aspect / image_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(margin, 0.0), pos2(1.0 - margin, 1.0))
    } else {
        let visible = image_aspect / box_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(0.0, margin), pos2(1.0, 1.0 - margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn item() -> DisplayItem {
        DisplayItem {
            id: "x".into(),
            image_url: "https://media.giphy.com/media/x/200w.gif".into(),
            static_image_url: "https://media.giphy.com/media/x/200w_s.gif".into(),
            width: 200,
            height: 100,
            title: "x".into(),
        }
    }

    #[test]
    fn test_display_url_follows_pause_flag() {
        let item = item();
        assert_eq!(display_url(&item, false), item.image_url);
        assert_eq!(display_url(&item, true), item.static_image_url);
    }

    #[test]
    fn test_phase_from_slot() {
        assert_eq!(CellPhase::of::<()>(None), CellPhase::Placeholder);
        assert_eq!(CellPhase::of::<()>(Some(&ImageSlot::Loading)), CellPhase::Placeholder);
        assert_eq!(CellPhase::of(Some(&ImageSlot::Ready(()))), CellPhase::Loaded);

        let failed = CellPhase::of::<()>(Some(&ImageSlot::Failed("404".into())));
        assert_eq!(failed, CellPhase::Error);
        assert!(!failed.is_loading());
        assert!(!failed.shows_title());
    }

    #[test]
    fn test_cover_uv_crops_wide_image() {
        let uv = cover_uv([200, 100], vec2(100.0, 100.0));
        assert!((uv.min.x - 0.25).abs() < 1e-6);
        assert!((uv.max.x - 0.75).abs() < 1e-6);
        assert_eq!(uv.min.y, 0.0);
        assert_eq!(uv.max.y, 1.0);
    }

    #[test]
    fn test_cover_uv_crops_tall_image() {
        let uv = cover_uv([100, 400], vec2(100.0, 200.0));
        assert!((uv.min.y - 0.25).abs() < 1e-6);
        assert!((uv.max.y - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_cover_uv_degenerate() {
        let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        assert_eq!(cover_uv([0, 10], vec2(10.0, 10.0)), full);
        assert_eq!(cover_uv([10, 10], vec2(0.0, 10.0)), full);
        assert_eq!(cover_uv([10, 10], vec2(10.0, 10.0)), full);
    }
}
