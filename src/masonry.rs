//! Virtualized masonry layout.
//!
//! Items are packed into a fixed number of lanes (columns) using
//! shortest-lane-first placement over estimated heights. Heights are derived
//! from each item's aspect ratio only, so the whole layout is known before any
//! image has loaded. Rendering code asks for a [`VisibleWindow`] every frame
//! and only instantiates the items inside it.
//!
//! All coordinates here are relative to the grid's own origin. The caller
//! subtracts the grid's offset inside the scroll area (the scroll margin)
//! before asking for a window.

use std::ops::Range;

use crate::model::DisplayItem;

/// Viewport widths at which the column count steps up.
pub const SMALL_BREAKPOINT: f32 = 600.0;
pub const MEDIUM_BREAKPOINT: f32 = 900.0;
pub const LARGE_BREAKPOINT: f32 = 1200.0;

/// Column count as a step function of viewport width.
pub fn column_count(viewport_width: f32) -> usize {
    if viewport_width < SMALL_BREAKPOINT {
        1
    } else if viewport_width < MEDIUM_BREAKPOINT {
        2
    } else if viewport_width < LARGE_BREAKPOINT {
        3
    } else {
        4
    }
}

/// Fixed layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasonryConfig {
    /// Space between lanes and between items within a lane.
    pub gap: f32,
    /// Horizontal padding subtracted from the viewport width.
    pub horizontal_padding: f32,
    /// Upper bound on the content width.
    pub max_content_width: f32,
    /// Floor applied to every estimated height.
    pub min_item_height: f32,
    /// Extra items kept on each side of the visible range.
    pub overscan: usize,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            gap: 16.0,
            horizontal_padding: 48.0,
            max_content_width: 1536.0,
            min_item_height: 100.0,
            overscan: 10,
        }
    }
}

impl MasonryConfig {
    /// Usable container width for a viewport width.
    pub fn container_width(&self, viewport_width: f32) -> f32 {
        (viewport_width - self.horizontal_padding)
            .min(self.max_content_width)
            .max(0.0)
    }

    /// Width of one column once inter-column gaps are removed.
    pub fn column_width(&self, viewport_width: f32, columns: usize) -> f32 {
        let columns = columns.max(1);
        let available =
            self.container_width(viewport_width) - self.gap * (columns - 1) as f32;
        (available / columns as f32).max(0.0)
    }

    /// Height estimate from the item's aspect ratio, floored at
    /// `min_item_height`. Zero dimensions never reach the division.
    pub fn estimated_height(&self, width: u32, height: u32, column_width: f32) -> f32 {
        if width == 0 || height == 0 {
            return self.min_item_height;
        }
        let aspect_ratio = height as f32 / width as f32;
        (column_width * aspect_ratio).max(self.min_item_height)
    }
}

/// Lane and vertical span of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub lane: usize,
    /// Top edge, relative to the grid origin.
    pub start: f32,
    /// Estimated height.
    pub size: f32,
}

impl Placement {
    pub fn end(&self) -> f32 {
        self.start + self.size
    }
}

/// Axis-aligned box of one item relative to the grid origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Contiguous range of item indices to instantiate this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleWindow {
    pub start: usize,
    /// Exclusive.
    pub end: usize,
}

impl VisibleWindow {
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Per-item estimated heights and lane assignments for a flat item list.
#[derive(Debug, Clone)]
pub struct MasonryLayout {
    config: MasonryConfig,
    viewport_width: f32,
    columns: usize,
    placements: Vec<Placement>,
    lane_ends: Vec<f32>,
    lane_counts: Vec<usize>,
    /// Ids at both ends of the measured list, used to tell an appended page
    /// from a replaced list.
    first_id: Option<String>,
    last_id: Option<String>,
}

impl Default for MasonryLayout {
    fn default() -> Self {
        Self::new(MasonryConfig::default())
    }
}

impl MasonryLayout {
    pub fn new(config: MasonryConfig) -> Self {
        Self {
            config,
            viewport_width: 0.0,
            columns: 1,
            placements: Vec::new(),
            lane_ends: vec![0.0],
            lane_counts: vec![0],
            first_id: None,
            last_id: None,
        }
    }

    /// Brings the layout up to date with `items` at `viewport_width`.
    ///
    /// A width change (and therefore any column change) or a list that is not
    /// an extension of the measured one forces a full re-measure. Otherwise
    /// only newly appended items are measured. Returns `true` on a full
    /// re-measure.
    pub fn sync(&mut self, items: &[DisplayItem], viewport_width: f32) -> bool {
        let columns = column_count(viewport_width);
        let geometry_changed = columns != self.columns || viewport_width != self.viewport_width;

        if geometry_changed || !self.is_prefix_of(items) {
            self.viewport_width = viewport_width;
            self.columns = columns;
            self.reset_lanes();
            self.measure_from(items, 0);
            return true;
        }

        if items.len() > self.placements.len() {
            let start = self.placements.len();
            self.measure_from(items, start);
        }
        false
    }

    fn is_prefix_of(&self, items: &[DisplayItem]) -> bool {
        let measured = self.placements.len();
        if measured == 0 {
            return true;
        }
        if items.len() < measured {
            return false;
        }
        self.first_id.as_deref() == Some(items[0].id.as_str())
            && self.last_id.as_deref() == Some(items[measured - 1].id.as_str())
    }

    fn reset_lanes(&mut self) {
        self.placements.clear();
        self.lane_ends = vec![0.0; self.columns];
        self.lane_counts = vec![0; self.columns];
        self.first_id = None;
        self.last_id = None;
    }

    fn measure_from(&mut self, items: &[DisplayItem], start: usize) {
        let column_width = self.column_width();
        for (index, item) in items.iter().enumerate().skip(start) {
            let size = self
                .config
                .estimated_height(item.width, item.height, column_width);
            let lane = self.shortest_lane();
            let top = if self.lane_counts[lane] == 0 {
                0.0
            } else {
                self.lane_ends[lane] + self.config.gap
            };

            self.placements.push(Placement { index, lane, start: top, size });
            self.lane_ends[lane] = top + size;
            self.lane_counts[lane] += 1;
        }

        self.first_id = items.first().map(|item| item.id.clone());
        self.last_id = items.last().map(|item| item.id.clone());
    }

    /// Lane with the smallest cumulative height; ties go to the lowest index.
    fn shortest_lane(&self) -> usize {
        let mut best = 0;
        for lane in 1..self.lane_ends.len() {
            if self.lane_ends[lane] < self.lane_ends[best] {
                best = lane;
            }
        }
        best
    }

    // ===== Queries =====

    pub fn config(&self) -> &MasonryConfig {
        &self.config
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn container_width(&self) -> f32 {
        self.config.container_width(self.viewport_width)
    }

    pub fn column_width(&self) -> f32 {
        self.config.column_width(self.viewport_width, self.columns)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    /// Total virtual height: the tallest lane. Zero for an empty list.
    pub fn total_height(&self) -> f32 {
        self.lane_ends.iter().copied().fold(0.0, f32::max)
    }

    /// Box of an item: lane `l` of `C` starts at `l / C` of the container
    /// width and spans `1 / C` of it.
    pub fn item_box(&self, placement: &Placement) -> ItemBox {
        let lane_width = self.container_width() / self.columns as f32;
        ItemBox {
            x: placement.lane as f32 * lane_width,
            y: placement.start,
            width: lane_width,
            height: placement.size,
        }
    }

    /// Items whose span intersects `[scroll_offset, scroll_offset + viewport_height]`,
    /// widened by the overscan on both sides.
    pub fn visible_window(&self, scroll_offset: f32, viewport_height: f32) -> VisibleWindow {
        let view_start = scroll_offset;
        let view_end = scroll_offset + viewport_height.max(0.0);

        let mut first: Option<usize> = None;
        let mut last: Option<usize> = None;
        for placement in &self.placements {
            if placement.start <= view_end && placement.end() >= view_start {
                first.get_or_insert(placement.index);
                last = Some(placement.index);
            }
        }

        match (first, last) {
            (Some(first), Some(last)) => VisibleWindow {
                start: first.saturating_sub(self.config.overscan),
                end: (last + 1 + self.config.overscan).min(self.placements.len()),
            },
            _ => VisibleWindow::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: usize, width: u32, height: u32) -> DisplayItem {
        DisplayItem {
            id: format!("gif-{}", id),
            image_url: format!("https://media.example/{}.gif", id),
            static_image_url: format!("https://media.example/{}_s.gif", id),
            width,
            height,
            title: format!("GIF {}", id),
        }
    }

    fn items(n: usize) -> Vec<DisplayItem> {
        (0..n)
            .map(|i| item(i, 200, 100 + (i as u32 * 37) % 250))
            .collect()
    }

    #[test]
    fn test_column_breakpoints() {
        assert_eq!(column_count(320.0), 1);
        assert_eq!(column_count(599.0), 1);
        assert_eq!(column_count(600.0), 2);
        assert_eq!(column_count(899.0), 2);
        assert_eq!(column_count(900.0), 3);
        assert_eq!(column_count(1199.0), 3);
        assert_eq!(column_count(1200.0), 4);
        assert_eq!(column_count(2560.0), 4);
    }

    #[test]
    fn test_column_width_caps_content() {
        let config = MasonryConfig::default();
        // (1248 - 48) = 1200 usable, minus 3 gaps = 1152, / 4 = 288
        assert_eq!(config.column_width(1248.0, 4), 288.0);
        // capped at 1536 usable
        assert_eq!(config.column_width(4000.0, 4), (1536.0 - 48.0) / 4.0);
    }

    #[test]
    fn test_estimated_height_from_aspect_ratio() {
        let config = MasonryConfig::default();
        assert_eq!(config.estimated_height(200, 300, 200.0), 300.0);
        assert_eq!(config.estimated_height(400, 50, 200.0), 100.0);
    }

    #[test]
    fn test_zero_dimensions_use_floor() {
        let config = MasonryConfig::default();
        assert_eq!(config.estimated_height(0, 300, 200.0), 100.0);
        assert_eq!(config.estimated_height(200, 0, 200.0), 100.0);
        assert_eq!(config.estimated_height(0, 0, 200.0), 100.0);
    }

    #[test]
    fn test_empty_list() {
        let mut layout = MasonryLayout::default();
        layout.sync(&[], 1300.0);
        assert_eq!(layout.total_height(), 0.0);
        assert!(layout.visible_window(0.0, 800.0).is_empty());
    }

    #[test]
    fn test_every_item_in_exactly_one_lane() {
        for width in [400.0, 700.0, 1000.0, 1400.0] {
            let list = items(57);
            let mut layout = MasonryLayout::default();
            layout.sync(&list, width);

            let columns = layout.columns();
            assert_eq!(layout.len(), list.len());
            for (i, placement) in layout.placements().iter().enumerate() {
                assert_eq!(placement.index, i);
                assert!(placement.lane < columns);
            }
        }
    }

    #[test]
    fn test_total_height_is_tallest_lane() {
        let list = items(23);
        let mut layout = MasonryLayout::default();
        layout.sync(&list, 1300.0);

        let mut lane_max = vec![0.0f32; layout.columns()];
        for placement in layout.placements() {
            lane_max[placement.lane] = lane_max[placement.lane].max(placement.end());
        }
        let expected = lane_max.into_iter().fold(0.0, f32::max);
        assert_eq!(layout.total_height(), expected);
    }

    #[test]
    fn test_single_column_keeps_list_order() {
        let list = items(10);
        let mut layout = MasonryLayout::default();
        layout.sync(&list, 400.0);

        assert_eq!(layout.columns(), 1);
        let mut previous_end = None;
        for placement in layout.placements() {
            assert_eq!(placement.lane, 0);
            if let Some(end) = previous_end {
                assert_eq!(placement.start, end + layout.config().gap);
            }
            previous_end = Some(placement.end());
        }
    }

    #[test]
    fn test_shortest_lane_first() {
        // Two columns; the first item is much taller, so items 2 and 3 both
        // land in lane 1 until it catches up.
        let list = vec![item(0, 100, 400), item(1, 100, 100), item(2, 100, 100), item(3, 100, 100)];
        let mut layout = MasonryLayout::default();
        layout.sync(&list, 700.0);

        let lanes: Vec<usize> = layout.placements().iter().map(|p| p.lane).collect();
        assert_eq!(lanes, vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_appending_keeps_existing_placements() {
        let list = items(30);
        let mut layout = MasonryLayout::default();
        layout.sync(&list[..25], 1300.0);
        let before: Vec<Placement> = layout.placements().to_vec();

        assert!(!layout.sync(&list, 1300.0));
        assert_eq!(&layout.placements()[..25], &before[..]);
        assert_eq!(layout.len(), 30);

        let mut fresh = MasonryLayout::default();
        fresh.sync(&list, 1300.0);
        assert_eq!(fresh.placements(), layout.placements());
    }

    #[test]
    fn test_width_change_forces_remeasure() {
        let list = items(12);
        let mut layout = MasonryLayout::default();
        layout.sync(&list, 1300.0);
        assert_eq!(layout.columns(), 4);

        assert!(layout.sync(&list, 800.0));
        assert_eq!(layout.columns(), 2);
        assert!(layout.placements().iter().all(|p| p.lane < 2));
    }

    #[test]
    fn test_replaced_list_forces_remeasure() {
        let mut layout = MasonryLayout::default();
        layout.sync(&items(12), 1300.0);

        let replacement: Vec<DisplayItem> = (100..105).map(|i| item(i, 200, 200)).collect();
        assert!(layout.sync(&replacement, 1300.0));
        assert_eq!(layout.len(), 5);
    }

    #[test]
    fn test_item_box_horizontal_offset() {
        let list = items(4);
        let mut layout = MasonryLayout::default();
        layout.sync(&list, 1248.0);

        let container = layout.container_width();
        for placement in layout.placements() {
            let item_box = layout.item_box(placement);
            assert_eq!(item_box.x, placement.lane as f32 / 4.0 * container);
            assert_eq!(item_box.width, container / 4.0);
        }
    }

    #[test]
    fn test_visible_window_is_bounded_by_overscan() {
        let list: Vec<DisplayItem> = (0..200).map(|i| item(i, 100, 100)).collect();
        let mut layout = MasonryLayout::new(MasonryConfig { overscan: 2, ..Default::default() });
        layout.sync(&list, 400.0);

        // single column; every item is column_width tall (352) plus a 16 gap
        let stride = layout.placements()[1].start;
        let window = layout.visible_window(stride * 50.0 + 1.0, stride * 2.0);

        assert_eq!(window.start, 48);
        assert!(window.end <= 55);
        assert!(window.indices().contains(&50));
        assert!(window.indices().contains(&52));
    }

    #[test]
    fn test_visible_window_at_top_includes_first_items() {
        let list = items(100);
        let mut layout = MasonryLayout::default();
        layout.sync(&list, 1300.0);

        let window = layout.visible_window(0.0, 900.0);
        assert_eq!(window.start, 0);
        assert!(window.len() < list.len());
        assert!(window.len() > 4);
    }
}
