//! Fixed-row-height virtual scrolling.
//!
//! The scroll area reserves the full content height up front, then only the
//! rows that intersect the viewport (plus a few rows of overscan) are handed to
//! the row painter. Cost per frame depends on the viewport, not the item count.

use egui::{pos2, vec2, Rect, ScrollArea, Sense, Ui};
use std::hash::Hash;
use std::ops::Range;

/// Extra rows painted below the viewport so fast scrolling doesn't show gaps.
pub const DEFAULT_OVERSCAN: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct VirtualList {
    item_count: usize,
    item_height: f32,
    height: f32,
    overscan: usize,
}

impl VirtualList {
    pub fn new(item_count: usize, item_height: f32) -> Self {
        Self {
            item_count,
            item_height,
            height: 300.0,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    /// Viewport height in points.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn overscan(mut self, rows: usize) -> Self {
        self.overscan = rows;
        self
    }

    pub fn content_height(&self) -> f32 {
        self.item_count as f32 * self.item_height
    }

    /// Indices to materialize for a viewport starting `scroll_top` points into the content.
    pub fn visible_range(&self, scroll_top: f32, viewport_height: f32) -> Range<usize> {
        if self.item_count == 0 || self.item_height <= 0.0 {
            return 0..0;
        }

        let first = ((scroll_top.max(0.0) / self.item_height).floor() as usize).min(self.item_count);
        let visible_count = (viewport_height.max(0.0) / self.item_height).ceil() as usize + self.overscan;
        let last = (first + visible_count).min(self.item_count);
        first..last
    }

    /// Render the list. `add_row` receives the row's full rect and its index.
    ///
    /// Returns the range of indices that were painted this frame.
    pub fn show(
        self,
        ui: &mut Ui,
        id_salt: impl Hash,
        mut add_row: impl FnMut(&mut Ui, Rect, usize),
    ) -> Range<usize> {
        let mut painted = 0..0;

        ScrollArea::vertical()
            .id_salt(id_salt)
            .auto_shrink([false, false])
            .max_height(self.height)
            .min_scrolled_height(self.height)
            .show_viewport(ui, |ui, viewport| {
                let width = ui.available_width();
                // Reserve the whole content so the scrollbar reflects item_count
                let (content, _) =
                    ui.allocate_exact_size(vec2(width, self.content_height()), Sense::hover());

                let range = self.visible_range(viewport.min.y, viewport.height());
                for index in range.clone() {
                    let top = content.top() + index as f32 * self.item_height;
                    let row = Rect::from_min_size(pos2(content.left(), top), vec2(width, self.item_height));
                    add_row(ui, row, index);
                }
                painted = range;
            });

        painted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_paints_nothing() {
        let list = VirtualList::new(0, 67.0);
        assert_eq!(list.visible_range(0.0, 500.0), 0..0);
        assert_eq!(list.content_height(), 0.0);
    }

    #[test]
    fn test_top_of_list() {
        let list = VirtualList::new(25_000, 67.0).height(500.0);
        // ceil(500 / 67) = 8 rows plus 2 overscan
        assert_eq!(list.visible_range(0.0, 500.0), 0..10);
    }

    #[test]
    fn test_range_follows_scroll_offset() {
        let list = VirtualList::new(25_000, 40.0).overscan(0);
        assert_eq!(list.visible_range(400.0, 300.0), 10..18);
        assert_eq!(list.visible_range(419.0, 300.0), 10..18);
        assert_eq!(list.visible_range(420.0, 300.0), 10..18);
        assert_eq!(list.visible_range(440.0, 300.0), 11..19);
    }

    #[test]
    fn test_range_is_bounded_by_viewport_not_count() {
        let small = VirtualList::new(1_000, 67.0);
        let large = VirtualList::new(1_000_000, 67.0);
        assert_eq!(small.visible_range(670.0, 500.0).len(), large.visible_range(670.0, 500.0).len());
    }

    #[test]
    fn test_range_clamped_at_end() {
        let list = VirtualList::new(25_000, 67.0);
        let bottom = list.content_height() - 500.0;
        let range = list.visible_range(bottom, 500.0);
        assert_eq!(range.end, 25_000);
        assert!(range.start < range.end);

        // Past the end (e.g. after the item count shrank)
        assert_eq!(list.visible_range(list.content_height() * 2.0, 500.0), 25_000..25_000);
    }

    #[test]
    fn test_short_list_shows_everything() {
        let list = VirtualList::new(3, 67.0);
        assert_eq!(list.visible_range(0.0, 500.0), 0..3);
    }

    #[test]
    fn test_negative_offset_treated_as_top() {
        let list = VirtualList::new(100, 10.0).overscan(0);
        assert_eq!(list.visible_range(-25.0, 30.0), 0..3);
    }
}
